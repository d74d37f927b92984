// lib.rs - bookmerge library root

//! # bookmerge - Merge per-book JSON files into a single sorted catalog
//!
//! This library aggregates many small per-book JSON files from a directory
//! into one pretty-printed JSON array file. Each file must hold a single JSON
//! object with at least `id`, `title` and `chapters`; everything else is
//! passed through unmodified. Records are sorted ascending by `id`, and
//! duplicate ids are warned about but kept.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use bookmerge::prelude::*;
//! use std::path::Path;
//!
//! let report = merge(Path::new("books_data"), Path::new("books.json"))?;
//! println!("{} books merged", report.merged);
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{Args, Config};
    pub use crate::core::{merge, merge_with_options, MergeOptions, MergeReport};
    pub use crate::data::{compare_ids, BookRecord, Catalog};
    pub use crate::output::write_catalog;
}

// Re-export main types at the root level for convenience
pub use cli::{Args, Config};
pub use data::{BookRecord, Catalog};
pub use self::core::{merge, merge_with_options, MergeOptions, MergeReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("bookmerge v{} - JSON book catalog merger", VERSION)
}
