use std::path::Path;
use std::sync::Arc;

use crate::error::AppError;

/// MIME type that qualifies a file as CSV regardless of its name; also sent on the uploaded part
pub const CSV_MIME: &str = "text/csv";
/// Name suffix that qualifies a file as CSV regardless of its declared type
pub const CSV_SUFFIX: &str = ".csv";

/// An un-validated file offered by the user (drop, open dialog, CLI).
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    /// Declared MIME type; empty or `None` when the platform does not report one
    pub mime: Option<String>,
    pub bytes: Arc<[u8]>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.filter(|m| !m.is_empty()),
            bytes: bytes.into(),
        }
    }

    /// Read a candidate from disk. The file name (not the full path) becomes the candidate name.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::FileRead(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, None, bytes))
    }

    /// Case-sensitive check: `text/csv` type OR a name ending in `.csv`.
    pub fn is_csv(&self) -> bool {
        self.mime.as_deref() == Some(CSV_MIME) || self.name.ends_with(CSV_SUFFIX)
    }
}

/// The single file currently held for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: Option<String>,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    /// Validate a candidate, producing the held file or the rejection error.
    pub fn try_from_candidate(candidate: FileCandidate) -> Result<Self, AppError> {
        if !candidate.is_csv() {
            return Err(AppError::InvalidFileType(candidate.name));
        }

        Ok(Self {
            size: candidate.bytes.len() as u64,
            name: candidate.name,
            mime: candidate.mime,
            bytes: candidate.bytes,
        })
    }

    pub fn size_kib(&self) -> f64 {
        self.size as f64 / 1024.0
    }

    /// "12.34 KB" as shown on the intake card
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size_kib())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, mime: Option<&str>) -> FileCandidate {
        FileCandidate::new(name, mime.map(str::to_string), b"date,close\n".to_vec())
    }

    #[test]
    fn accepts_csv_suffix_or_csv_mime() {
        assert!(candidate("prices.csv", None).is_csv());
        assert!(candidate("prices.txt", Some("text/csv")).is_csv());
        assert!(candidate("export", Some("text/csv")).is_csv());
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!candidate("prices.xlsx", Some("application/vnd.ms-excel")).is_csv());
        assert!(!candidate("prices.csv.bak", None).is_csv());
        assert!(!candidate("notes.txt", Some("")).is_csv());
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        assert!(!candidate("PRICES.CSV", None).is_csv());
        let err = SelectedFile::try_from_candidate(candidate("PRICES.CSV", None)).unwrap_err();
        assert_eq!(err, AppError::InvalidFileType("PRICES.CSV".to_string()));
    }

    #[test]
    fn size_label_uses_kib_with_two_decimals() {
        let file = SelectedFile::try_from_candidate(FileCandidate::new(
            "big.csv",
            None,
            vec![0u8; 1536],
        ))
        .unwrap();
        assert_eq!(file.size, 1536);
        assert_eq!(file.size_label(), "1.50 KB");
    }
}
