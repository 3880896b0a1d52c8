//! # jbmc-cex
//!
//! Counterexample value reconstruction from JBMC symbolic-execution traces.
//!
//! The trace format encodes heap objects, arrays, and strings as flat,
//! dotted-path assignment sequences with aliasing through synthetic
//! pointer records. This crate rebuilds the fully typed, nested value that
//! existed at each top-level input variable at the moment of failure:
//!
//! - [`classify`](classify::classify) maps a type-descriptor string onto a
//!   closed [`TypeClass`](classify::TypeClass);
//! - [`RecordStore`](store::RecordStore) is the ordered, queryable view over
//!   one failing execution's records;
//! - [`Resolver`](resolve::Resolver) is the recursive reconstruction engine
//!   (pointer chasing, array truncation and patching, nested field
//!   assembly, cycle detection);
//! - [`assemble`](assemble::assemble) drives the resolver over every
//!   top-level argument and pairs the results with the failure reason.
//!
//! ## Usage
//!
//! ```no_run
//! use jbmc_cex::assemble;
//! use jbmc_cex_trace::parse_trace_doc;
//!
//! let xml = std::fs::read_to_string("trace.xml").unwrap();
//! let traces = parse_trace_doc(&xml).unwrap();
//! for cex in assemble(&traces) {
//!     println!("{}: {} input(s)", cex.reason, cex.inputs.len());
//! }
//! ```

pub mod assemble;
pub mod classify;
pub mod error;
pub mod resolve;
pub mod store;
pub mod value;

// Re-export primary types for ergonomic use
pub use assemble::{Counterexample, InputValue, SkippedInput, assemble};
pub use error::CexError;
pub use resolve::Resolver;
pub use store::RecordStore;
pub use value::{PrimitiveKind, Value};
