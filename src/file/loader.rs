//! Document loading functionality.
//!
//! This module provides functions to load configuration documents from files
//! or stdin, parsing them into [`Document`] values that can be queried.

use crate::document::node::Document;
use crate::document::parser::parse_document;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a configuration file from the filesystem.
///
/// Files with a `.gz` extension are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use hclquill::file::loader::load_document_file;
///
/// let doc = load_document_file("main.tf").unwrap();
/// let region = doc.get_as_string("provider.aws.region").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - The file contents are not a valid configuration document
pub fn load_document_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file '{}'", path_ref.display()))?
    };

    log::debug!("loaded {} bytes from {}", content.len(), path_ref.display());
    parse_document(&content).context("Failed to parse document")
}

/// Loads and parses a configuration document from standard input.
///
/// Gzip-compressed input is detected by its magic bytes and decompressed.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is not valid UTF-8 or not a valid configuration document
pub fn load_document_from_stdin() -> Result<Document> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_document_from_bytes(buffer)
}

/// Parses a document from raw bytes, decompressing gzip data if present.
pub fn load_document_from_bytes(buffer: Vec<u8>) -> Result<Document> {
    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    parse_document(&content).context("Failed to parse document")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::Value;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(content: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_load_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.hcl");
        fs::write(&path, "a = [1, 2, 3]").unwrap();

        let doc = load_document_file(&path).unwrap();
        assert_eq!(doc.get("a[-1]").unwrap(), Value::Integer(3));
    }

    #[test]
    fn test_load_gzipped_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.hcl.gz");
        fs::write(&path, gzip("a { b = \"2\" }")).unwrap();

        let doc = load_document_file(&path).unwrap();
        assert_eq!(doc.get("a.b").unwrap(), Value::from("2"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_document_file(dir.path().join("missing.hcl"));
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_load_from_bytes_detects_gzip() {
        let doc = load_document_from_bytes(gzip("a = 12")).unwrap();
        assert_eq!(doc.get("a").unwrap(), Value::Integer(12));

        let plain = load_document_from_bytes(b"a = 12".to_vec()).unwrap();
        assert_eq!(plain, doc);
    }

    #[test]
    fn test_load_invalid_document_fails() {
        let err = load_document_from_bytes(b"a = ".to_vec()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse document"));
    }
}
