use std::path::Path;

use crate::UploadError;

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file picked or dropped by the user, held only for the duration of one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub filename: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    /// Wrap in-memory bytes, guessing the content type from the filename.
    pub fn from_bytes(filename: impl Into<String>, data: Vec<u8>) -> Self {
        let filename = filename.into();
        let mime_type = guess_mime(&filename);
        Self {
            filename,
            mime_type,
            data,
        }
    }

    /// Read a file from disk.
    pub async fn load(path: &Path) -> Result<Self, UploadError> {
        let data = tokio::fs::read(path).await.map_err(|source| UploadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_bytes(display_name(path), data))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// File name shown to the user and sent as the multipart filename.
/// Falls back to the whole path when there is no final component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Guess a MIME type from a file name's extension.
pub fn guess_mime(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_extension() {
        assert_eq!(guess_mime("report.pdf"), "application/pdf");
        assert_eq!(guess_mime("scan.PNG"), "image/png");
        assert_eq!(guess_mime("photo.jpeg"), "image/jpeg");
        assert_eq!(guess_mime("no_extension"), FALLBACK_MIME);
    }

    #[test]
    fn display_name_is_last_component() {
        assert_eq!(display_name(Path::new("/tmp/scans/my report.pdf")), "my report.pdf");
        assert_eq!(display_name(Path::new("page1.png")), "page1.png");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[tokio::test]
    async fn load_keeps_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, b"%PDF-1.4 fake").unwrap();

        let file = SelectedFile::load(&path).await.unwrap();
        assert_eq!(file.filename, "report.pdf");
        assert_eq!(file.mime_type, "application/pdf");
        assert_eq!(file.data, b"%PDF-1.4 fake");
        assert_eq!(file.len(), 13);
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::load(&dir.path().join("gone.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Io { .. }));
    }
}
