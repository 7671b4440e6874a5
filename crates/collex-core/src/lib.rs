//! Collex Core - structural containment engine for associative containers
//!
//! This crate decides whether an actual map or multimap satisfies an expected
//! structural relationship and, when it does not, describes exactly how it
//! fails. It provides:
//! - The [`AssociativeContainer`] abstraction over `HashMap`, `BTreeMap`,
//!   `IndexMap` and the multi-valued [`Multimap`]
//! - Containment, exclusion, exact-match and size checks (see [`engine`])
//! - Structured failures carrying diff data and a stable error kind
//! - Boundary logging through `tracing`
//!
//! Message rendering is left to callers; every failure implements `Display`
//! with a plain default.

pub mod container;
pub mod diff;
pub mod engine;
pub mod errors;
pub mod logging_facility;

// Re-export commonly used types
pub use container::{entry, AssociativeContainer, Entry, IterationOrder, Multimap, ValueArity};
pub use diff::{DiffResult, IndexMismatch};
pub use engine::{Condition, ContainmentResult};
pub use errors::{ContainmentError, ExError, ExErrorKind, PreconditionError, SequenceError};
