// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions
)]

//! # String Walker
//!
//! Cursor-based navigation over an immutable string, for hand-written
//! lexers and parsers that scan imperatively.
//!
//! A [`StringWalker`] owns its text and a single mutable cursor:
//! - Lookups relative to the cursor (`peek`, `behind`, `current`, `at`)
//! - Forward searches for a char or a set of chars (`find_next`, `find_next_of`)
//! - Movement (`move_by`, `move_to`, `rewind`, `consume`, `advance`)
//! - Extraction (`substring`, `remaining`)
//!
//! Lookups return `Option` and are safe to probe speculatively. Commands
//! return `Result<_, WalkerError>` and never move the cursor on failure.
//!
//! ## Modules
//!
//! - [`walker`]: The cursor type
//! - [`needle`]: Search targets and char sets
//! - [`normalize`]: Line-ending normalization
//! - [`config`]: Construction options and their file format
//! - [`error`]: Error type

pub mod config;
pub mod error;
pub mod needle;
pub mod normalize;
pub mod walker;

pub use config::{OptionLayer, WalkerOptions, ZeroLookbehind};
pub use error::WalkerError;
pub use needle::{CharSet, Needle};
pub use normalize::{NewlineMode, normalize_newlines};
pub use walker::StringWalker;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::WalkerOptions;
    pub use crate::error::WalkerError;
    pub use crate::walker::StringWalker;
}
