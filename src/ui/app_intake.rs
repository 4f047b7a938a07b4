use std::path::Path;
use std::sync::Arc;

use eframe::egui;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::FileCandidate;
use crate::error::AppError;
use crate::ui::app::ForecastApp;

/// Turn a dropped file into a candidate. Files that already fail the CSV check are
/// not read from disk; they only need a name to be rejected.
pub(crate) fn candidate_from_dropped(file: egui::DroppedFile) -> Result<FileCandidate, AppError> {
    let mime = Some(file.mime.clone());
    let name = if file.name.is_empty() {
        file.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        file.name.clone()
    };

    let by_name = FileCandidate::new(name.clone(), mime.clone(), Arc::<[u8]>::from(Vec::new()));
    if !by_name.is_csv() {
        return Ok(by_name);
    }

    if let Some(bytes) = file.bytes {
        return Ok(FileCandidate::new(name, mime, bytes));
    }

    if let Some(path) = file.path {
        let from_disk = FileCandidate::from_path(&path)?;
        return Ok(FileCandidate::new(name, mime, from_disk.bytes));
    }

    Err(AppError::FileRead(format!("'{}' has no readable content", name)))
}

impl ForecastApp {
    /// Route a candidate through the session; rejections raise the blocking notification.
    pub(super) fn offer_file(&mut self, candidate: FileCandidate) {
        match self.session.select_file(candidate) {
            Ok(_) => {
                self.plot_view.clear_cache();
                self.rejection = None;
            }
            Err(e) => {
                log::warn!("File rejected: {}", e);
                self.rejection = Some(e);
            }
        }
    }

    pub(super) fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.len() > 1 {
            log::debug!("Dropped {} files; only the first is kept", dropped.len());
        }

        // Only one file is held; extra files in the same drop are ignored.
        let Some(first) = dropped.into_iter().next() else {
            return;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Considering dropped file '{}'", first.name);
        }

        match candidate_from_dropped(first) {
            Ok(candidate) => self.offer_file(candidate),
            Err(e) => {
                log::error!("Could not read dropped file: {}", e);
                self.rejection = Some(e);
            }
        }
    }

    pub(super) fn open_typed_path(&mut self) {
        let raw = self.path_input.trim().to_string();
        if raw.is_empty() {
            return;
        }

        let path = Path::new(&raw);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw.clone());
        let by_name = FileCandidate::new(name, None, Arc::<[u8]>::from(Vec::new()));

        let candidate = if by_name.is_csv() {
            FileCandidate::from_path(path)
        } else {
            Ok(by_name)
        };

        match candidate {
            Ok(candidate) => {
                self.offer_file(candidate);
                if self.rejection.is_none() {
                    self.path_input.clear();
                }
            }
            Err(e) => {
                log::error!("Could not open {}: {}", raw, e);
                self.rejection = Some(e);
            }
        }
    }

    pub(super) fn clear_selected_file(&mut self) {
        self.session.clear_file();
        self.plot_view.clear_cache();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropped(name: &str, mime: &str, bytes: Option<&[u8]>) -> egui::DroppedFile {
        egui::DroppedFile {
            name: name.to_string(),
            mime: mime.to_string(),
            bytes: bytes.map(Arc::from),
            ..Default::default()
        }
    }

    #[test]
    fn dropped_csv_bytes_become_candidate() {
        let candidate = candidate_from_dropped(dropped("prices.csv", "", Some(b"date,close\n")))
            .expect("csv accepted");
        assert_eq!(candidate.name, "prices.csv");
        assert_eq!(candidate.mime, None);
        assert_eq!(&*candidate.bytes, b"date,close\n");
    }

    #[test]
    fn mime_alone_qualifies() {
        let candidate = candidate_from_dropped(dropped("export", "text/csv", Some(b"x")))
            .expect("csv by type");
        assert!(candidate.is_csv());
    }

    #[test]
    fn non_csv_is_returned_unread_for_rejection() {
        let candidate = candidate_from_dropped(dropped("chart.png", "image/png", None))
            .expect("candidate returned");
        assert!(!candidate.is_csv());
        assert!(candidate.bytes.is_empty());
    }

    #[test]
    fn csv_without_content_is_a_read_error() {
        let err = candidate_from_dropped(dropped("prices.csv", "", None)).unwrap_err();
        assert!(matches!(err, AppError::FileRead(_)));
    }
}
