//! Filesystem store mapping image IDs to blobs and metadata records.

use std::io;
use std::path::{Path, PathBuf};

use imgvault_common::{Error, ImageFormat, ImageId, Result};

use crate::record::ImageRecord;

/// Result of a successful save: the issued ID and the blob location.
///
/// The path is returned for caller logging only; it is not part of the
/// lookup contract.
#[derive(Debug, Clone)]
pub struct SavedImage {
    pub id: ImageId,
    pub path: PathBuf,
}

/// Filesystem-backed store for image blobs and their metadata records.
///
/// A save writes the blob first and registers the metadata second, so a
/// reader can never observe metadata without its blob. `load` still
/// re-checks blob presence to cover a crash between the two writes.
pub struct ImageStore {
    blob_dir: PathBuf,
    metadata_dir: PathBuf,
}

impl ImageStore {
    /// Create a store rooted at the given directories, creating them if
    /// they do not exist.
    pub fn new(blob_dir: impl Into<PathBuf>, metadata_dir: impl Into<PathBuf>) -> Result<Self> {
        let blob_dir = blob_dir.into();
        let metadata_dir = metadata_dir.into();
        std::fs::create_dir_all(&blob_dir)?;
        std::fs::create_dir_all(&metadata_dir)?;
        Ok(Self {
            blob_dir,
            metadata_dir,
        })
    }

    /// Persist raw image bytes and a metadata record under a fresh ID.
    ///
    /// The caller must have already validated `format` against the
    /// supported set. On success both writes are complete; on failure no
    /// half-registered image remains (a blob whose metadata write failed
    /// is removed before the error is returned).
    pub fn save(&self, data: &[u8], format: ImageFormat) -> Result<SavedImage> {
        let id = ImageId::new();
        let blob_path = self.blob_path(id, format);

        std::fs::write(&blob_path, data).map_err(|e| {
            Error::storage_write(format!("writing blob {}: {}", blob_path.display(), e))
        })?;

        let record = ImageRecord {
            id,
            original_extension: format,
        };
        let metadata_path = self.metadata_path(id);
        if let Err(e) = write_metadata(&metadata_path, &record) {
            // Roll back the blob so the failed save leaves nothing
            // discoverable behind.
            let _ = std::fs::remove_file(&blob_path);
            return Err(Error::storage_write(format!(
                "writing metadata {}: {}",
                metadata_path.display(),
                e
            )));
        }

        Ok(SavedImage {
            id,
            path: blob_path,
        })
    }

    /// Load the raw bytes and original format for an ID.
    ///
    /// Returns `Ok(None)` when the ID has no metadata record, and also
    /// when the record exists but its blob is missing, rather than
    /// surfacing a lower-level I/O fault for an inconsistent pair.
    pub fn load(&self, id: ImageId) -> Result<Option<(Vec<u8>, ImageFormat)>> {
        let metadata_path = self.metadata_path(id);
        let json = match std::fs::read_to_string(&metadata_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record: ImageRecord = serde_json::from_str(&json).map_err(|e| {
            Error::io(format!(
                "corrupt metadata record {}: {}",
                metadata_path.display(),
                e
            ))
        })?;

        let blob_path = self.blob_path(id, record.original_extension);
        let data = match std::fs::read(&blob_path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some((data, record.original_extension)))
    }

    /// The supported format tokens, shared by upload validation and
    /// conversion-target validation.
    pub fn supported_extensions() -> &'static [ImageFormat] {
        ImageFormat::supported()
    }

    fn blob_path(&self, id: ImageId, format: ImageFormat) -> PathBuf {
        self.blob_dir.join(format!("{}.{}", id, format))
    }

    fn metadata_path(&self, id: ImageId) -> PathBuf {
        self.metadata_dir.join(format!("{}.json", id))
    }
}

fn write_metadata(path: &Path, record: &ImageRecord) -> io::Result<()> {
    let json = serde_json::to_string(record).map_err(io::Error::other)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ImageStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("blobs"), dir.path().join("metadata")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, store) = temp_store();
        let saved = store.save(b"not really a png", ImageFormat::Png).unwrap();

        let (data, format) = store.load(saved.id).unwrap().unwrap();
        assert_eq!(data, b"not really a png");
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn test_save_reports_blob_path() {
        let (_dir, store) = temp_store();
        let saved = store.save(b"bytes", ImageFormat::Gif).unwrap();
        assert!(saved.path.exists());
        assert_eq!(
            saved.path.file_name().unwrap().to_str().unwrap(),
            format!("{}.gif", saved.id)
        );
    }

    #[test]
    fn test_save_rolls_back_blob_when_metadata_write_fails() {
        let (dir, store) = temp_store();

        // Make the metadata write fail after the blob write succeeds.
        std::fs::remove_dir_all(dir.path().join("metadata")).unwrap();

        let err = store.save(b"bytes", ImageFormat::Png).unwrap_err();
        assert!(matches!(err, Error::StorageWrite(_)));

        // The failed save must leave nothing discoverable behind.
        let blobs: Vec<_> = std::fs::read_dir(dir.path().join("blobs"))
            .unwrap()
            .collect();
        assert!(blobs.is_empty());
    }

    #[test]
    fn test_load_missing_id_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.load(ImageId::new()).unwrap().is_none());
    }

    #[test]
    fn test_load_metadata_without_blob_is_none() {
        let (_dir, store) = temp_store();
        let saved = store.save(b"bytes", ImageFormat::Jpeg).unwrap();

        // Simulate a crash window: metadata present, blob gone.
        std::fs::remove_file(&saved.path).unwrap();
        assert!(store.load(saved.id).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_metadata_is_error() {
        let (dir, store) = temp_store();
        let saved = store.save(b"bytes", ImageFormat::Png).unwrap();
        let metadata_path = dir
            .path()
            .join("metadata")
            .join(format!("{}.json", saved.id));
        std::fs::write(&metadata_path, "{ not json").unwrap();

        assert!(matches!(store.load(saved.id), Err(Error::Io(_))));
    }

    #[test]
    fn test_sequential_saves_issue_distinct_ids() {
        let (_dir, store) = temp_store();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..32 {
            let saved = store.save(b"x", ImageFormat::Png).unwrap();
            assert!(ids.insert(saved.id));
        }
    }

    #[test]
    fn test_supported_extensions() {
        let tokens: Vec<&str> = ImageStore::supported_extensions()
            .iter()
            .map(|f| f.as_str())
            .collect();
        assert_eq!(tokens, ["png", "jpeg", "gif"]);
    }
}
