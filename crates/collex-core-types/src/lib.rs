//! Core types shared across collex facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the logging facility:
//!
//! - **Field keys**: structured logging field names
//! - **Event names**: operation boundary events
//! - **Operation names**: stable identifiers for every engine operation

pub mod schema;

pub use schema::ops;
