//! # Domain Models
//!
//! Plain data shared by the form crates: the profile record with its defaults,
//! application configuration and the field paths/messages of the profile form.
//! Keep it lean: `serde` and `chrono` only, no I/O.

pub mod config;
pub mod constants;
pub mod profile;
