// mod.rs - Catalog writer module

use crate::data::BookRecord;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| {
                format!(
                    "Failed to create parent directory '{}': {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }
    Ok(())
}

/// Write the sorted catalog as a pretty-printed JSON array.
///
/// 2-space indent, UTF-8, non-ASCII characters written literally. Any
/// existing file at the path is overwritten.
pub fn write_catalog(file_path: &Path, books: &[BookRecord]) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path).map_err(|e| {
        format!(
            "Failed to create output file '{}': {}",
            file_path.display(),
            e
        )
    })?;
    let mut writer = BufWriter::new(file);

    let json = serde_json::to_string_pretty(books)
        .map_err(|e| format!("Failed to serialize catalog: {}", e))?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Catalog written to: {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn record(id: u64) -> BookRecord {
        BookRecord::from_value(json!({"id": id, "title": "t", "chapters": []})).unwrap()
    }

    #[test]
    fn test_write_catalog_pretty_array() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("books.json");

        write_catalog(&path, &[record(1), record(2)]).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        // pretty-printed with 2-space indent
        assert!(raw.starts_with("[\n  {"));

        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_catalog_is_valid_json() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("books.json");

        write_catalog(&path, &[]).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, json!([]));
    }

    #[test]
    fn test_parent_dirs_are_created() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("site").join("data").join("books.json");

        write_catalog(&path, &[record(1)]).unwrap();
        assert!(path.exists());
    }
}
