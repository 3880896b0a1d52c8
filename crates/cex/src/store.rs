//! Ordered, queryable view over one failing execution's records.
//!
//! The store is a borrowed, immutable log queried functionally: iteration
//! always preserves document order, which later stages rely on for
//! last-write-wins resolution and array patch order. Lookups are linear
//! scans; traces are short-lived and per-execution.

use jbmc_cex_trace::Record;

/// Queryable view over the ordered record list of one failing execution.
#[derive(Debug, Clone, Copy)]
pub struct RecordStore<'a> {
    records: &'a [Record],
}

impl<'a> RecordStore<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }

    /// All records in document order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter()
    }

    /// Records whose path's first segment equals `name`, in document order.
    pub fn records_for_root(&self, name: &str) -> impl Iterator<Item = &'a Record> + '_ {
        let name = name.to_string();
        self.records.iter().filter(move |r| r.root() == name)
    }

    /// The last record in document order with exactly this path text.
    pub fn last_write(&self, path: &str) -> Option<&'a Record> {
        self.records.iter().rev().find(|r| r.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(base: &str, path: &str, value: &str) -> Record {
        Record {
            base_name: base.to_string(),
            path: path.to_string(),
            value: value.to_string(),
            declared_type: "int".to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("arg0", "arg0", "1"),
            record("obj", "obj.length", "3"),
            record("obj", "obj.data", "&payload"),
            record("arg0", "arg0", "2"),
            record("obj", "obj.length", "2"),
            record("payload", "payload[0]", "9"),
        ]
    }

    #[test]
    fn last_write_wins() {
        let records = sample();
        let store = RecordStore::new(&records);
        assert_eq!(store.last_write("arg0").unwrap().value, "2");
        assert_eq!(store.last_write("obj.length").unwrap().value, "2");
        assert!(store.last_write("missing").is_none());
    }

    #[test]
    fn records_for_root_matches_first_segment_only() {
        let records = sample();
        let store = RecordStore::new(&records);
        let paths: Vec<&str> = store
            .records_for_root("obj")
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(paths, vec!["obj.length", "obj.data", "obj.length"]);
    }

    #[test]
    fn records_for_root_includes_indexed_paths() {
        let records = sample();
        let store = RecordStore::new(&records);
        let paths: Vec<&str> = store
            .records_for_root("payload")
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(paths, vec!["payload[0]"]);
    }

    #[test]
    fn iteration_preserves_document_order() {
        let records = sample();
        let store = RecordStore::new(&records);
        let values: Vec<&str> = store.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["1", "3", "&payload", "2", "2", "9"]);
    }
}
