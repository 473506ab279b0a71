//! Upload surface: the click-or-drop region and its two presentation flags.
//!
//! A terminal has no native drop events. Dropping a file onto most
//! terminal emulators pastes its path (quoted, backslash-escaped or as a
//! `file://` URI), so a paste is treated as a drop.

use std::path::{Path, PathBuf};

/// Picker filter: any image type plus PDF.
pub const ACCEPT: &str = "image/*,.pdf";

/// What the front-end should do after a click on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    OpenPicker,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSurface {
    /// A drag is hovering over the surface. Presentation only.
    pub dragging: bool,
    /// An upload has been attempted at least once. Never rolled back.
    pub uploaded: bool,
}

impl UploadSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&self) -> SurfaceAction {
        SurfaceAction::OpenPicker
    }

    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Take the first of `paths` for upload. With no paths this is a no-op
    /// and both flags are left as they were.
    pub fn take_first<I>(&mut self, paths: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let first = paths.into_iter().next()?;
        self.dragging = false;
        self.uploaded = true;
        Some(first)
    }

    /// Handle pasted drop text. Returns the path to upload, if any.
    pub fn drop_text(&mut self, text: &str) -> Option<PathBuf> {
        let paths = parse_dropped_paths(text);
        if paths.is_empty() {
            self.dragging = false;
            return None;
        }
        self.take_first(paths)
    }
}

/// Whether the picker offers `path` for selection. A hint, not a check:
/// dropped files are uploaded whatever their type.
pub fn accepts(path: &Path) -> bool {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    is_pdf
        || mime_guess::from_path(path)
            .iter()
            .any(|m| m.type_() == mime_guess::mime::IMAGE)
}

/// Split pasted drop text into paths.
///
/// Handles whitespace-separated paths, single/double quoting, backslash
/// escapes and percent-encoded `file://` URIs.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    tokenize(text)
        .into_iter()
        .map(|token| match token.strip_prefix("file://") {
            Some(rest) => {
                // Strip an optional host component (file://localhost/tmp/a.pdf)
                let path = match rest.find('/') {
                    Some(0) | None => rest,
                    Some(i) => &rest[i..],
                };
                urlencoding::decode(path)
                    .map(|p| p.into_owned())
                    .unwrap_or_else(|_| path.to_string())
            }
            None => token,
        })
        .map(PathBuf::from)
        .collect()
}

fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token && !current.is_empty() {
        tokens.push(current);
    }
    tokens.retain(|t| !t.is_empty());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_noop() {
        let mut surface = UploadSurface::new();
        surface.drag_enter();
        let before = surface.clone();

        assert!(surface.take_first(Vec::<PathBuf>::new()).is_none());
        assert_eq!(surface, before);
    }

    #[test]
    fn empty_selection_keeps_uploaded_flag() {
        let mut surface = UploadSurface {
            dragging: false,
            uploaded: true,
        };
        assert!(surface.take_first(Vec::new()).is_none());
        assert!(surface.uploaded);
    }

    #[test]
    fn first_file_wins() {
        let mut surface = UploadSurface::new();
        let picked = surface.take_first(vec![PathBuf::from("a.pdf"), PathBuf::from("b.png")]);
        assert_eq!(picked, Some(PathBuf::from("a.pdf")));
        assert!(surface.uploaded);
        assert!(!surface.dragging);
    }

    #[test]
    fn drag_flags_toggle() {
        let mut surface = UploadSurface::new();
        surface.drag_enter();
        assert!(surface.dragging);
        surface.drag_over();
        assert!(surface.dragging);
        surface.drag_leave();
        assert!(!surface.dragging);
        assert!(!surface.uploaded);
    }

    #[test]
    fn click_opens_picker() {
        assert_eq!(UploadSurface::new().click(), SurfaceAction::OpenPicker);
    }

    #[test]
    fn whitespace_drop_clears_drag_without_upload() {
        let mut surface = UploadSurface::new();
        surface.drag_enter();
        assert!(surface.drop_text("  \n ").is_none());
        assert!(!surface.dragging);
        assert!(!surface.uploaded);
    }

    #[test]
    fn parses_escaped_spaces() {
        assert_eq!(
            parse_dropped_paths(r"/tmp/my\ report.pdf /tmp/other.png"),
            vec![
                PathBuf::from("/tmp/my report.pdf"),
                PathBuf::from("/tmp/other.png")
            ]
        );
    }

    #[test]
    fn parses_quoted_paths() {
        assert_eq!(
            parse_dropped_paths("'/tmp/my report.pdf' "),
            vec![PathBuf::from("/tmp/my report.pdf")]
        );
        assert_eq!(
            parse_dropped_paths("\"/tmp/scan 1.jpg\""),
            vec![PathBuf::from("/tmp/scan 1.jpg")]
        );
    }

    #[test]
    fn parses_file_uris() {
        assert_eq!(
            parse_dropped_paths("file:///tmp/my%20report.pdf\nfile://localhost/tmp/b.png\n"),
            vec![
                PathBuf::from("/tmp/my report.pdf"),
                PathBuf::from("/tmp/b.png")
            ]
        );
    }

    #[test]
    fn accept_filter_matches_images_and_pdf() {
        assert!(accepts(Path::new("report.PDF")));
        assert!(accepts(Path::new("scan.png")));
        assert!(accepts(Path::new("photo.jpg")));
        assert!(accepts(Path::new("diagram.tiff")));
        assert!(!accepts(Path::new("notes.txt")));
        assert!(!accepts(Path::new("archive.zip")));
        assert!(!accepts(Path::new("README")));
    }
}
