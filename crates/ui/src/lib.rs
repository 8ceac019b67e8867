//! # UI
//!
//! Dioxus components for the profile form. The controller lives in a
//! `Signal<ProfileForm>`; input events are routed through it and asynchronous
//! checks are spawned on the UI event loop, their results handed back with
//! `resolve`.
//!
//! The launcher provides an [`AppConfig`](tubeform_domain::config::AppConfig) as
//! root context; without one the defaults are used.

mod components;

pub use crate::components::{App, ProfilePage};
