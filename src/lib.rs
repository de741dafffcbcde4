//! crmtidy - CRM export cleaning
//!
//! Fills Sector/Category columns in CSV exports, either from a row's Tags
//! using priority-ordered rules, or from a master organisation list matched
//! by name.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TidyError;
