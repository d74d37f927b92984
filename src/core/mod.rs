// mod.rs - Core merge module

pub mod merge;

// Re-export main types for convenience
pub use merge::{merge, merge_with_options, MergeOptions, MergeReport};
