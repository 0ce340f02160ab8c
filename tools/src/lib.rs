//! Conversion and inspection tools for UserGameStatsSchema files.
//!
//! This crate backs the `ugss-tools` binary:
//!
//! - Deconstruct a binary schema into editable YAML
//! - Reconstruct a binary schema from YAML
//! - Inspect a schema's size, digest and entry statistics
//! - Report each failure class with its own message
//!
//! # Design Principles
//!
//! - **Nothing half-written** - Output files appear only after a conversion succeeds.
//! - **Human-readable output** - Failures are reported by class, not as raw byte offsets.

pub mod convert;
pub mod inspect;
pub mod paths;
pub mod report;

pub use convert::{deconstruct_file, reconstruct_file, Conversion};
pub use inspect::{format_inspect_pretty, inspect_document, InspectReport, TagCount};
pub use paths::{
    derive_output, expect_schema_name, parse_schema_name, NameError, OutputPath, SchemaFormat,
    SchemaName,
};
pub use report::{classify, describe_failure, failure_message};
