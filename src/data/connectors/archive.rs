use crate::config::ArchiveConfig;
use crate::error::{ArchiveplotError, Result};
use crate::types::{GenerationDataset, GenerationIndex};
use super::{
    types::{ArchiveMetadata, ColumnLayout},
    validator::RecordValidator,
};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Reads `<base>/<data_folder>/<prefix><generation>.<ext>` archive files.
pub struct ArchiveConnector {
    folder: PathBuf,
    config: ArchiveConfig,
    layout: ColumnLayout,
}

impl ArchiveConnector {
    pub fn new<P: AsRef<Path>>(base_dir: P, data_folder: &str, config: ArchiveConfig) -> Self {
        let layout = ColumnLayout::from(&config);
        Self {
            folder: base_dir.as_ref().join(data_folder),
            config,
            layout,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn path_for(&self, generation: GenerationIndex) -> PathBuf {
        self.folder.join(self.config.file_name(generation.value()))
    }

    /// Load one generation's archive. The file handle lives only for the
    /// duration of this call.
    pub fn load(&self, generation: GenerationIndex) -> Result<(GenerationDataset, ArchiveMetadata)> {
        let path = self.path_for(generation);
        let file = File::open(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ArchiveplotError::ResourceNotFound { path: path.clone() },
            _ => ArchiveplotError::DataFormat {
                path: path.clone(),
                line: 0,
                reason: format!("archive is not readable: {}", e),
            },
        })?;

        let (dataset, skipped) = Self::read_records(BufReader::new(file), &path, generation, &self.layout)?;

        let metadata = ArchiveMetadata {
            file_path: path,
            generation: generation.value(),
            num_records: dataset.len(),
            skipped_blank_lines: skipped,
            color_max: dataset.max_color(),
        };
        log::debug!(
            "Read {} records from {} ({} blank lines skipped)",
            metadata.num_records,
            metadata.file_path.display(),
            metadata.skipped_blank_lines
        );

        Ok((dataset, metadata))
    }

    /// Parse records from any line source, keeping file order.
    pub fn read_records<R: BufRead>(
        reader: R,
        path: &Path,
        generation: GenerationIndex,
        layout: &ColumnLayout,
    ) -> Result<(GenerationDataset, usize)> {
        let mut dataset = GenerationDataset::new(generation);
        let mut skipped = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ArchiveplotError::DataFormat {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: format!("line is not readable text: {}", e),
            })?;
            if RecordValidator::is_blank(&line) {
                skipped += 1;
                continue;
            }

            let record = RecordValidator::parse_line(&line, layout).map_err(|reason| {
                ArchiveplotError::DataFormat {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason,
                }
            })?;
            dataset.push(record.x, record.y, record.color);
        }

        Ok((dataset, skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn read(text: &str) -> Result<(GenerationDataset, usize)> {
        ArchiveConnector::read_records(
            Cursor::new(text),
            Path::new("archive_0.dat"),
            GenerationIndex(0),
            &ColumnLayout::default(),
        )
    }

    #[test]
    fn test_single_line_takes_absolute_value() {
        let (ds, skipped) = read("0 0.25 0.75 -3.2\n").unwrap();
        assert_eq!(ds.xs(), &[0.25]);
        assert_eq!(ds.ys(), &[0.75]);
        assert_eq!(ds.colors(), &[3.2]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn test_preserves_file_order_and_duplicates() {
        let (ds, _) = read("0 0.9 0.1 1\n1 0.1 0.9 -2\n2 0.9 0.1 1\n").unwrap();
        assert_eq!(ds.xs(), &[0.9, 0.1, 0.9]);
        assert_eq!(ds.ys(), &[0.1, 0.9, 0.1]);
        assert_eq!(ds.colors(), &[1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (ds, skipped) = read("\n0 0.1 0.2 0.3\n   \n1 0.4 0.5 0.6\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = read("0 0.1 0.2 0.3\n1 0.4 0.5\n").unwrap_err();
        match err {
            ArchiveplotError::DataFormat { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let connector = ArchiveConnector::new(dir.path(), "run", ArchiveConfig::default());
        let err = connector.load(GenerationIndex(10)).unwrap_err();
        match err {
            ArchiveplotError::ResourceNotFound { path } => {
                assert!(path.ends_with("run/archive_10.dat"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_utf8_line_is_data_format() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("run")).unwrap();
        fs::write(
            dir.path().join("run").join("archive_0.dat"),
            b"0 0.1 0.2 0.3\n0 \xff\xfe 0.2 0.3\n",
        )
        .unwrap();

        let connector = ArchiveConnector::new(dir.path(), "run", ArchiveConfig::default());
        match connector.load(GenerationIndex(0)).unwrap_err() {
            ArchiveplotError::DataFormat { path, line, .. } => {
                assert!(path.ends_with("archive_0.dat"));
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unreadable_path_is_data_format() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the archive file opens but cannot be read
        // as text, or fails to open, depending on the platform.
        fs::create_dir_all(dir.path().join("run").join("archive_0.dat")).unwrap();

        let connector = ArchiveConnector::new(dir.path(), "run", ArchiveConfig::default());
        let err = connector.load(GenerationIndex(0)).unwrap_err();
        assert!(matches!(err, ArchiveplotError::DataFormat { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("run")).unwrap();
        fs::write(
            dir.path().join("run").join("archive_20.dat"),
            "0 0.1 0.2 -4\n1 0.3 0.4 2\n",
        )
        .unwrap();

        let connector = ArchiveConnector::new(dir.path(), "run", ArchiveConfig::default());
        let (ds, meta) = connector.load(GenerationIndex(20)).unwrap();
        assert_eq!(ds.generation, GenerationIndex(20));
        assert_eq!(ds.colors(), &[4.0, 2.0]);
        assert_eq!(meta.num_records, 2);
        assert_eq!(meta.color_max, Some(4.0));
    }
}
