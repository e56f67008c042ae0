//! Filesystem primitives for Shelf
//!
//! Provides storage layout resolution, best-effort file moves and
//! format-agnostic configuration loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use config::ConfigStore;
pub use constants::ShelfPath;
pub use error::{Error, Result};
pub use layout::StorageLayout;
pub use path::NormalizedPath;
