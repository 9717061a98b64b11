//! Display formatting for terminal output
//!
//! Provides utilities for formatting records for terminal display in detail
//! and table views.

pub mod record;

pub use record::{
    format_page_header, format_record_details, format_record_table, format_search_results,
};
