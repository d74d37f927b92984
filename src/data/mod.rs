// mod.rs - Data structures module

pub mod catalog;
pub mod record;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use record::{compare_ids, BookRecord};
