//! Image attachment validation.
//!
//! A [`PendingUpload`] is whatever the user picked. Only a validated
//! [`ImageUpload`] can be handed to [`crate::QuoteApi::upload_media`], so a
//! rejected file never reaches the network.

use crate::error::ValidationError;

pub const ACCEPTED_CONTENT_TYPE: &str = "image/jpeg";

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// A file selected for upload, not yet checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    /// Content type reported by the picker, if any.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl PendingUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Content type from the picker, falling back to the file extension.
    pub fn resolved_content_type(&self) -> String {
        if let Some(content_type) = &self.content_type {
            let trimmed = content_type.trim();
            if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("application/octet-stream") {
                return trimmed.to_ascii_lowercase();
            }
        }

        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    /// Accept only JPEG images: declared type and file signature must agree.
    pub fn validate(self) -> Result<ImageUpload, ValidationError> {
        let content_type = self.resolved_content_type();
        if content_type != ACCEPTED_CONTENT_TYPE {
            return Err(ValidationError::UnsupportedImageType { content_type });
        }
        if self.bytes.is_empty() {
            return Err(ValidationError::EmptyFile);
        }
        if !self.bytes.starts_with(&JPEG_MAGIC) {
            return Err(ValidationError::UnsupportedImageType { content_type });
        }

        Ok(ImageUpload {
            file_name: self.file_name,
            bytes: self.bytes,
        })
    }
}

/// A JPEG that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub const fn content_type(&self) -> &'static str {
        ACCEPTED_CONTENT_TYPE
    }
}

#[cfg(test)]
pub(crate) fn sample_jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_jpg_by_extension() {
        let upload = PendingUpload::new("photo.jpg", sample_jpeg()).validate().unwrap();
        assert_eq!(upload.file_name(), "photo.jpg");
        assert_eq!(upload.content_type(), "image/jpeg");
    }

    #[test]
    fn prefers_reported_content_type() {
        let upload = PendingUpload::new("blob", sample_jpeg()).with_content_type("image/jpeg");
        assert!(upload.validate().is_ok());
    }

    #[test]
    fn rejects_png() {
        let error = PendingUpload::new("photo.png", vec![0x89, b'P', b'N', b'G'])
            .validate()
            .unwrap_err();
        assert_eq!(
            error,
            ValidationError::UnsupportedImageType {
                content_type: "image/png".to_string()
            }
        );
    }

    #[test]
    fn rejects_renamed_non_jpeg() {
        let error = PendingUpload::new("fake.jpg", b"GIF89a".to_vec())
            .validate()
            .unwrap_err();
        assert!(matches!(error, ValidationError::UnsupportedImageType { .. }));
    }

    #[test]
    fn rejects_empty_file() {
        let error = PendingUpload::new("empty.jpg", Vec::new()).validate().unwrap_err();
        assert_eq!(error, ValidationError::EmptyFile);
    }
}
