//! Roster - an interactive console roster of person records
//!
//! This library provides the record-management core and the console boundary
//! for a small in-memory roster. Records carry a dense 1-based serial that is
//! recomputed after every change; nothing is persisted between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The record model and search selectors
//! - `services`: The roster itself and the pagination policy
//! - `display`: Terminal formatting for records
//! - `cli`: Input validation, prompting and the menu loop
//!
//! # Example
//!
//! ```rust
//! use roster::models::{Gender, RecordFields};
//! use roster::services::Roster;
//!
//! let mut roster = Roster::new();
//! roster.add(RecordFields::new("Al", 30, Gender::Male, "Eng")).unwrap();
//! assert_eq!(roster.all()[0].serial, 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{RosterError, RosterResult};
