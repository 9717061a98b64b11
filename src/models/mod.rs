//! Core data models for the roster
//!
//! This module contains the person record and the typed selectors used to
//! search it.

pub mod number;
pub mod record;
pub mod selector;

pub use number::parse_digits;
pub use record::{Gender, Record, RecordFields};
pub use selector::{FieldSelector, SearchQuery};
