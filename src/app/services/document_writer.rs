//! CoverageJSON output writing
//!
//! Serializes a document as 2-space indented JSON. Output goes to a
//! temporary file next to the destination and is renamed into place only
//! once fully written, so the destination is never left truncated.

use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::coverage::CoverageDocument;
use crate::error::{ConvertError, Result};

/// Writer for a single output path
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    output_path: PathBuf,
}

impl DocumentWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write the document, replacing any existing file; returns bytes written
    pub fn write(&self, document: &CoverageDocument) -> Result<u64> {
        self.write_json(document)
    }

    fn write_json<T: Serialize>(&self, document: &T) -> Result<u64> {
        let path = self.output_path.as_path();
        let to_write_error = |e: std::io::Error| ConvertError::write(path, e);

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(directory).map_err(to_write_error)?;
        debug!(
            "Staging output in temporary file {}",
            temp_file.path().display()
        );

        {
            let mut writer = BufWriter::new(temp_file.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, document)
                .map_err(|e| to_write_error(e.into()))?;
            writer.flush().map_err(to_write_error)?;
        }

        let file = temp_file.as_file();
        file.sync_all().map_err(to_write_error)?;
        let bytes_written = file.metadata().map_err(to_write_error)?.len();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(to_write_error)?;
        }

        temp_file.persist(path).map_err(|e| to_write_error(e.error))?;

        info!("Wrote {} bytes to {}", bytes_written, path.display());
        Ok(bytes_written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::document_builder::DocumentBuilder;
    use crate::models::ExtractedSeries;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_document() -> CoverageDocument {
        let mut values = BTreeMap::new();
        values.insert("temperature".to_string(), vec![280.5, 281.0]);
        let series = ExtractedSeries {
            times: vec![
                "2023-01-01T00:00:00Z".to_string(),
                "2023-01-01T01:00:00Z".to_string(),
            ],
            longitude: -3.0,
            latitude: 51.0,
            values,
        };
        DocumentBuilder::default().build(series).unwrap()
    }

    #[test]
    fn test_write_indented_json() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("coverage.json");

        let bytes = DocumentWriter::new(&output).write(&sample_document()).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(bytes, content.len() as u64);
        assert!(content.starts_with("{\n  \"type\": \"Coverage\",\n  \"domain\": {\n    \"type\""));

        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["ranges"]["temperature"]["values"][1], 281.0);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("coverage.json");
        std::fs::write(&output, "x".repeat(10_000)).unwrap();

        DocumentWriter::new(&output).write(&sample_document()).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(!content.contains("xxx"));
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
    }

    /// Emits part of a document, then fails
    struct AbortsMidway;

    impl Serialize for AbortsMidway {
        fn serialize<S: serde::Serializer>(
            &self,
            serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            use serde::ser::{Error, SerializeMap};

            let mut map = serializer.serialize_map(Some(2))?;
            map.serialize_entry("type", "Coverage")?;
            Err(S::Error::custom("document aborted"))
        }
    }

    const PREVIOUS_OUTPUT: &str = "{\"previous\": true}";

    #[test]
    fn test_failed_serialization_keeps_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("coverage.json");
        std::fs::write(&output, PREVIOUS_OUTPUT).unwrap();

        match DocumentWriter::new(&output).write_json(&AbortsMidway) {
            Err(ConvertError::Write { path, source }) => {
                assert_eq!(path, output);
                assert!(source.to_string().contains("document aborted"));
            }
            other => panic!("Expected Write error, got {:?}", other),
        }

        assert_eq!(std::fs::read_to_string(&output).unwrap(), PREVIOUS_OUTPUT);
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_directory_keeps_existing_output() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        let output = locked.join("coverage.json");
        std::fs::write(&output, PREVIOUS_OUTPUT).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users can write regardless of mode bits
        if NamedTempFile::new_in(&locked).is_ok() {
            println!("Skipping read-only directory test - running with elevated privileges");
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = DocumentWriter::new(&output).write(&sample_document());
        let entries: Vec<_> = std::fs::read_dir(&locked).unwrap().collect();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(ConvertError::Write { .. })));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), PREVIOUS_OUTPUT);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("no").join("such").join("coverage.json");

        match DocumentWriter::new(&output).write(&sample_document()) {
            Err(ConvertError::Write { path, .. }) => assert_eq!(path, output),
            other => panic!("Expected Write error, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_failed_rename_leaves_no_temporary_files() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("occupied");
        std::fs::create_dir(&output).unwrap();
        std::fs::write(output.join("keep.txt"), "keep").unwrap();

        let result = DocumentWriter::new(&output).write(&sample_document());
        assert!(matches!(result, Err(ConvertError::Write { .. })));

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            std::fs::read_to_string(output.join("keep.txt")).unwrap(),
            "keep"
        );
    }
}
