// Text extraction from uploaded media.

pub const IMAGE_PLACEHOLDER: &str = "Image OCR not implemented.";
pub const VIDEO_PLACEHOLDER: &str = "Video text extraction not implemented.";

/// Shown to the generator when nothing readable came out of the upload.
pub const NO_CONTENT_FALLBACK: &str = "No readable content found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Document,
    Image,
    Video,
}

impl MediaKind {
    /// Classify an upload by file extension. Unknown extensions are not a
    /// supported kind and extract to nothing.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Document),
            "png" | "jpg" | "jpeg" => Some(Self::Image),
            "mp4" | "mov" | "avi" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        file_name.rsplit_once('.').and_then(|(_, ext)| Self::from_extension(ext))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// Extract plain text from an uploaded file.
///
/// Documents yield the concatenated page text; any extraction error yields an
/// empty string rather than propagating. Image OCR and video transcription
/// are not implemented and return fixed placeholder text. The caller is
/// responsible for substituting [`NO_CONTENT_FALLBACK`] when the result is
/// blank.
pub fn extract_text(bytes: &[u8], kind: MediaKind) -> String {
    match kind {
        MediaKind::Document => match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!("pdf text extraction failed: {e}");
                String::new()
            }
        },
        MediaKind::Image => IMAGE_PLACEHOLDER.to_string(),
        MediaKind::Video => VIDEO_PLACEHOLDER.to_string(),
    }
}
