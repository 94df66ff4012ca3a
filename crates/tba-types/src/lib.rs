//! Statically typed Telegram Bot API objects and their JSON encoding.
//!
//! This crate has no transport. File contents are fetched through the
//! [`files::FileRetriever`] port, implemented over HTTP in `tba-files`.

pub mod codec;
pub mod config;
pub mod errors;
pub mod files;
pub mod literal;
pub mod logging;
pub mod types;
pub mod variant;

pub use errors::{Error, Result};
pub use variant::Variant;
