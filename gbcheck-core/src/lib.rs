//! Game Boy cartridge header validation.
//!
//! The entry point is [`validate`], which inspects a borrowed ROM image and returns a
//! [`HeaderReport`]. Header problems are reported, not returned as errors; only an image too
//! small to contain a header is treated differently, and even that is a report state.

#![forbid(unsafe_code)]

pub mod addresses;
mod header;
mod report;

pub use header::{header_checksum, validate, HeaderValidator};
pub use report::{Finding, HeaderReport, HeaderStatus, ParsedHeader, PreviewByte};
