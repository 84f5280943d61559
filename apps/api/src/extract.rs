//! Text Extractor — turns an uploaded document into a plain-text string.
//!
//! Upload validation (size, type) happens here, before extraction and before
//! any network call. PDF goes through `pdf-extract` for real container
//! parsing; DOCX is a best-effort lossy decode behind the same interface.

use bytes::Bytes;
use thiserror::Error;

use crate::errors::AppError;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Minimum trimmed length for extracted text to count as a valid resume.
pub const MIN_RESUME_CHARS: usize = 50;

pub const MEDIA_TYPE_TEXT: &str = "text/plain";
pub const MEDIA_TYPE_PDF: &str = "application/pdf";
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const ALLOWED_TYPES: [&str; 3] = [MEDIA_TYPE_TEXT, MEDIA_TYPE_PDF, MEDIA_TYPE_DOCX];

/// An uploaded document: opaque payload plus its declared media type.
/// Created at upload, discarded after text extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub media_type: String,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported media type: {0}")]
    UnsupportedType(String),

    #[error("failed to decode document: {0}")]
    Decode(String),
}

/// Rejects oversized or disallowed uploads with user-facing messages.
/// Must run before `extract_text` — and therefore before any network call.
pub fn validate_upload(doc: &UploadedDocument) -> Result<(), AppError> {
    if doc.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File size too large. Please upload a file smaller than 10MB.".to_string(),
        ));
    }

    if !ALLOWED_TYPES.contains(&doc.media_type.as_str()) {
        return Err(AppError::Validation(
            "Invalid file type. Please upload a PDF, DOCX, or TXT file.".to_string(),
        ));
    }

    Ok(())
}

/// Extracts plain text from a validated upload.
pub fn extract_text(doc: &UploadedDocument) -> Result<String, ExtractError> {
    match doc.media_type.as_str() {
        MEDIA_TYPE_TEXT => std::str::from_utf8(&doc.bytes)
            .map(str::to_string)
            .map_err(|e| ExtractError::Decode(e.to_string())),
        MEDIA_TYPE_PDF => pdf_extract::extract_text_from_mem(&doc.bytes)
            .map_err(|e| ExtractError::Decode(e.to_string())),
        // Best-effort byte-to-text without interpreting the container.
        // A real DOCX collaborator can replace this without touching callers.
        MEDIA_TYPE_DOCX => Ok(String::from_utf8_lossy(&doc.bytes).into_owned()),
        other => Err(ExtractError::UnsupportedType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(bytes: &[u8], media_type: &str) -> UploadedDocument {
        UploadedDocument {
            bytes: Bytes::copy_from_slice(bytes),
            media_type: media_type.to_string(),
        }
    }

    #[test]
    fn test_validate_rejects_oversized_upload() {
        let big = doc(&vec![b'a'; MAX_UPLOAD_BYTES + 1], MEDIA_TYPE_TEXT);
        let err = validate_upload(&big).unwrap_err();
        assert!(err.to_string().contains("File size too large"));
    }

    #[test]
    fn test_validate_accepts_upload_at_limit() {
        let at_limit = doc(&vec![b'a'; MAX_UPLOAD_BYTES], MEDIA_TYPE_TEXT);
        assert!(validate_upload(&at_limit).is_ok());
    }

    #[test]
    fn test_validate_rejects_disallowed_type() {
        let gif = doc(b"GIF89a", "image/gif");
        let err = validate_upload(&gif).unwrap_err();
        assert!(err.to_string().contains("Invalid file type"));
    }

    #[test]
    fn test_plain_text_decodes_directly() {
        let d = doc("Jane Doe\njane@example.com".as_bytes(), MEDIA_TYPE_TEXT);
        assert_eq!(extract_text(&d).unwrap(), "Jane Doe\njane@example.com");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let d = doc(&[0xff, 0xfe, 0x00], MEDIA_TYPE_TEXT);
        assert!(matches!(extract_text(&d), Err(ExtractError::Decode(_))));
    }

    #[test]
    fn test_docx_decode_is_lossy_not_fatal() {
        let mut bytes = b"Some resume text ".to_vec();
        bytes.push(0xff); // invalid UTF-8 byte survives as replacement char
        bytes.extend_from_slice(b" more text");
        let d = doc(&bytes, MEDIA_TYPE_DOCX);
        let text = extract_text(&d).unwrap();
        assert!(text.contains("Some resume text"));
        assert!(text.contains("more text"));
    }

    #[test]
    fn test_unknown_type_is_unsupported() {
        let d = doc(b"data", "application/zip");
        assert!(matches!(
            extract_text(&d),
            Err(ExtractError::UnsupportedType(_))
        ));
    }
}
