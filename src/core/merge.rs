// merge.rs - The catalog merge procedure

use crate::data::{BookRecord, Catalog};
use crate::output::write_catalog;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for a merge run
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Scan and validate only, write nothing
    pub dry_run: bool,
}

/// Counters for one merge run. Console messages are the user-visible surface;
/// the report exists for callers and tests.
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Number of `.json` files found in the input directory
    pub candidates: usize,
    /// Records that made it into the catalog
    pub merged: usize,
    /// Files that parsed but lacked a required field
    pub skipped_invalid: usize,
    /// Files that could not be read or parsed
    pub read_errors: usize,
    /// Records whose id was already seen (still merged)
    pub duplicate_ids: usize,
    /// Whether the output file was (re)written
    pub output_written: bool,
}

/// Merge all `.json` files under `input_dir` into a single sorted catalog at
/// `output_file`.
///
/// Per-file problems are logged and skipped; only a missing input directory
/// or an empty candidate list end the run early (without an output file), and
/// only hard filesystem failures surface as `Err`.
pub fn merge(input_dir: &Path, output_file: &Path) -> Result<MergeReport, String> {
    merge_with_options(input_dir, output_file, &MergeOptions::default())
}

/// Merge with explicit options
pub fn merge_with_options(
    input_dir: &Path,
    output_file: &Path,
    options: &MergeOptions,
) -> Result<MergeReport, String> {
    let mut report = MergeReport::default();

    // Setup assist: create the input directory and stop, nothing to merge yet
    if !input_dir.exists() {
        println!("❌ Input directory '{}' does not exist", input_dir.display());
        fs::create_dir_all(input_dir).map_err(|e| {
            format!(
                "Failed to create input directory '{}': {}",
                input_dir.display(),
                e
            )
        })?;
        println!(
            "✅ Created '{}'. Put your book files there and rerun.",
            input_dir.display()
        );
        return Ok(report);
    }

    let files = list_candidate_files(input_dir)?;
    if files.is_empty() {
        println!(
            "⚠️  No .json files found in '{}' - nothing to merge",
            input_dir.display()
        );
        return Ok(report);
    }

    report.candidates = files.len();
    println!("📚 Found {} book files. Merging...", files.len());

    let mut catalog = Catalog::new();

    for path in &files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let value = match read_json_file(path) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("❌ Error reading {}: {}", file_name, e);
                report.read_errors += 1;
                continue;
            }
        };

        let record = match BookRecord::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                println!("⚠️  Skipping {}: {}", file_name, e);
                report.skipped_invalid += 1;
                continue;
            }
        };

        let id = record.id().clone();
        if catalog.push(record) {
            println!("⚠️  WARNING: duplicate id {} ({})", id, file_name);
            report.duplicate_ids += 1;
        }
    }

    catalog.sort_by_id();
    report.merged = catalog.len();

    if options.dry_run {
        println!(
            "✅ Dry run completed: {} books would be written to '{}'",
            catalog.len(),
            output_file.display()
        );
        return Ok(report);
    }

    write_catalog(output_file, catalog.books())?;
    report.output_written = true;

    println!(
        "🎉 Success! '{}' updated with {} books.",
        output_file.display(),
        catalog.len()
    );

    Ok(report)
}

/// List immediate `.json` entries of the input directory, sorted by file name
/// so warnings and duplicate attribution are deterministic.
fn list_candidate_files(input_dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(input_dir).map_err(|e| {
        format!(
            "Failed to list input directory '{}': {}",
            input_dir.display(),
            e
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            format!(
                "Failed to read entry in '{}': {}",
                input_dir.display(),
                e
            )
        })?;
        let path = entry.path();
        let is_candidate = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".json"))
            .unwrap_or(false);
        if is_candidate {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read a candidate file and parse its full contents as one JSON value
fn read_json_file(path: &Path) -> Result<Value, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| format!("invalid JSON: {}", e))
}
