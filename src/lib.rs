//! `strkit` is a small library of string transformations with the ROT13
//! cipher at its core.
//!
//! Besides ROT13 (`cipher::rot13`), the crate offers a catalog of everyday
//! helpers (`string_utils`), greeting templates (`template`), a playing card
//! index lookup (`cards`) and box drawing rectangles (`rectangle`). Text
//! transforms can be chained by name through `transforms::TransformManager`.
//!
//! "Hello world" example:
//! ```
//! use strkit::prelude::*;
//!
//! let secret = rot13("Hello, World!");
//! assert_eq!(secret, "Uryyb, Jbeyq!");
//! assert_eq!(rot13(&secret), "Hello, World!");
//!
//! let shouted = TransformManager::get()
//!     .apply(&["rot13", "upper"], "uryyb")
//!     .unwrap();
//! assert_eq!(shouted, "HELLO");
//! ```

pub mod cards;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod error;
pub mod filters;
pub mod log;
pub mod rectangle;
pub mod string_utils;
pub mod template;
pub mod transforms;

#[doc(hidden)]
pub use nu_ansi_term;

/// The strkit prelude
///
/// This module re-exports the most commonly used items from strkit.
/// You can use it with `use strkit::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::error::Result;
    pub use crate::transforms::TransformManager;

    // Re-export commonly used functions
    pub use crate::cipher::rot13;
    pub use crate::string_utils::{extract_emails, trim_whitespace, unbracket_tag};
}
