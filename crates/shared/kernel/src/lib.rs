//! Kernel utilities shared by the form crates: layered config loading and
//! short URL-safe ids for field-array entries.
//!
//! ## Entry ids
//! ```rust
//! # use tubeform_kernel::entry_id;
//! let id = entry_id!();
//! assert_eq!(id.len(), 10);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use tubeform_kernel::config::load_config;
//! use tubeform_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("tubeform.toml"))?;
//! ```
pub mod config;

// No visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Length of ids produced by [`entry_id!`] without an explicit size.
pub const ENTRY_ID_LEN: usize = 10;

pub use nanoid::nanoid;
pub use tubeform_domain as domain;

/// Generates an unambiguous `NanoID` used as a stable identity key.
#[macro_export]
macro_rules! entry_id {
    () => {
        $crate::nanoid!({ $crate::ENTRY_ID_LEN }, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!({ $size }, $crate::SAFE_ALPHABET)
    };
}
