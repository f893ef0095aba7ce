//! moodlog - Daily mood diary
//!
//! Records one mood per calendar day to an append-only text diary and, once a
//! week of entries exists, reports a diagnosis over the seven most recent ones.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
