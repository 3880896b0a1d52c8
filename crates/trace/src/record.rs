/// A single symbolic assignment step from a JBMC goto trace.
///
/// Records are immutable once parsed and kept in document order; ordering is
/// significant because reconstruction is last-write-wins per path and
/// applies array index patches in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The `base_name` attribute: the root symbolic name this assignment
    /// belongs to (e.g. `arg0`, `dynamic_object3`).
    pub base_name: String,
    /// The `full_lhs` text: dot/bracket path of the written location
    /// (e.g. `arg0`, `dynamic_object3.data`, `dynamic_object2[1L]`).
    pub path: String,
    /// The `full_lhs_value` text: a literal, a brace aggregate, or an
    /// indirection token such as `&dynamic_object2`.
    pub value: String,
    /// The `full_lhs_type` text: JBMC's type descriptor for the location.
    pub declared_type: String,
}

impl Record {
    /// First segment of the path: everything before the first `.` or `[`.
    pub fn root(&self) -> &str {
        let end = self
            .path
            .find(['.', '['])
            .unwrap_or(self.path.len());
        &self.path[..end]
    }
}

/// One failing execution: its ordered assignment records and the reported
/// failure reason. Associated 1:1 with a record store during reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailingTrace {
    pub records: Vec<Record>,
    pub reason: String,
}
