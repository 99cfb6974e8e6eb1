//! MetaPeek: meta-tag and social sharing analysis from the command line.
//!
//! The crate is a thin client over the hosted analysis service. A target URL
//! is normalized and validated, sent to the service, and the scored result is
//! rendered as a terminal report, a Markdown table, or raw JSON.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
