//! # jbmc-cex-trace
//!
//! Document model and parser for JBMC `--xml-ui` trace output.
//!
//! A trace document contains one `result` element per checked property.
//! Only `status="FAILURE"` results carry a `goto_trace`: an ordered list of
//! `assignment` steps followed by a `failure` step naming the violated
//! property. This crate turns that document into one [`FailingTrace`]
//! (ordered [`Record`] list plus failure reason) per failing execution;
//! value reconstruction lives in the `jbmc-cex` crate.
//!
//! ## Usage
//!
//! ```no_run
//! use jbmc_cex_trace::parse_trace_doc;
//!
//! let xml = std::fs::read_to_string("trace.xml").unwrap();
//! for trace in parse_trace_doc(&xml).unwrap() {
//!     println!("{} records, failed: {}", trace.records.len(), trace.reason);
//! }
//! ```

pub mod error;
pub mod parse;
pub mod record;

// Re-export primary types for ergonomic use
pub use error::TraceError;
pub use parse::parse_trace_doc;
pub use record::{FailingTrace, Record};
