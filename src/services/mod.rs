//! Service layer for the roster
//!
//! The service layer owns the record collection and every operation on it,
//! plus the pagination policy used when listing.

pub mod pager;
pub mod roster;

pub use pager::{PageCommand, PageOutcome, Pager, PAGE_SIZE};
pub use roster::Roster;
