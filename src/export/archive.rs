//! ZIP packaging for batch exports.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// DEFLATE level balancing speed and size for text-heavy entries.
const COMPRESSION_LEVEL: i64 = 6;

/// Writes `entries` (name, bytes) into a ZIP archive at `path`.
///
/// Entry names are validated against zip-slip; names come from
/// [`crate::export::filename`] but the archive layer checks anyway.
pub fn write_zip(path: &Path, entries: &[(String, Vec<u8>)]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create zip file: {}", path.display()))?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL))
        .unix_permissions(0o644);

    for (name, content) in entries {
        add_file_to_zip(&mut zip, name, content, options)?;
    }

    zip.finish().context("Failed to finalize zip")?;
    Ok(())
}

/// Adds a file to a zip archive with zip-slip prevention.
fn add_file_to_zip(
    zip: &mut ZipWriter<File>,
    name: &str,
    content: &[u8],
    options: SimpleFileOptions,
) -> Result<()> {
    if name.contains("..") || name.starts_with('/') || name.starts_with('\\') {
        anyhow::bail!("Invalid filename in zip: {name}");
    }

    zip.start_file(name, options)
        .with_context(|| format!("Failed to start zip entry {name}"))?;
    zip.write_all(content)
        .with_context(|| format!("Failed to write zip entry {name}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn archive_round_trips_entries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.zip");
        let entries = vec![
            ("#01_apple.svg".to_string(), b"<svg>a</svg>".to_vec()),
            ("#02_banana.svg".to_string(), b"<svg>b</svg>".to_vec()),
        ];
        write_zip(&path, &entries).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);
        let mut first = String::new();
        archive.by_index(0).unwrap().read_to_string(&mut first).unwrap();
        assert_eq!(first, "<svg>a</svg>");
        assert_eq!(archive.by_index(1).unwrap().name(), "#02_banana.svg");
    }

    #[test]
    fn archive_rejects_traversal_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.zip");
        let entries = vec![("../escape.svg".to_string(), Vec::new())];
        assert!(write_zip(&path, &entries).is_err());
    }
}
