//! Character classification and language profiles
//!
//! Profiles are small TOML documents embedded in the crate. Each one turns
//! into a [`ConfigurableClassifier`] implementing [`CharacterClassifier`].

pub mod interface;

mod char_table;
pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod runtime;

pub use interface::*;
pub use loader::{available_languages, get_classifier, DEFAULT_LANGUAGE};
pub use runtime::ConfigurableClassifier;
