use axum::extract::Multipart;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;

/// Multipart field the CV must be uploaded under.
pub const FILE_FIELD: &str = "file";
/// Required filename suffix. Compared case-sensitively.
pub const ALLOWED_EXTENSION: &str = ".txt";

/// An uploaded CV, held in memory for the lifetime of one request.
#[derive(Debug)]
pub struct UploadedCv {
    pub filename: String,
    pub bytes: Bytes,
}

impl UploadedCv {
    pub fn into_text(self) -> Result<String, AppError> {
        Ok(String::from_utf8(Vec::from(self.bytes))?)
    }
}

/// Checks a filename in order: non-empty, then `.txt` suffix.
pub fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::NoFileSelected);
    }
    if !filename.ends_with(ALLOWED_EXTENSION) {
        return Err(AppError::InvalidFileType);
    }
    Ok(())
}

/// Finds the first `file` field that carries a filename, validates the filename,
/// and reads its body. A `file` field without a filename is a plain form value,
/// not an upload, and is skipped.
pub async fn extract_cv_upload(multipart: &mut Multipart) -> Result<UploadedCv, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };

        validate_filename(&filename)?;

        let bytes = field.bytes().await?;
        info!("Read uploaded file '{filename}', {} bytes", bytes.len());
        return Ok(UploadedCv { filename, bytes });
    }

    Err(AppError::MissingFilePart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filename_rejected() {
        assert!(matches!(
            validate_filename(""),
            Err(AppError::NoFileSelected)
        ));
    }

    #[test]
    fn test_non_txt_rejected() {
        for name in ["resume.pdf", "cv", "resume.TXT", "notes.txt.bak", "txt"] {
            assert!(
                matches!(validate_filename(name), Err(AppError::InvalidFileType)),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_txt_accepted() {
        for name in ["cv.txt", "my resume.txt", ".txt", "archive.tar.txt"] {
            assert!(validate_filename(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_into_text_decodes_utf8() {
        let upload = UploadedCv {
            filename: "cv.txt".to_string(),
            bytes: Bytes::from("Dr. José Müller".as_bytes().to_vec()),
        };
        assert_eq!(upload.into_text().unwrap(), "Dr. José Müller");
    }

    #[test]
    fn test_into_text_rejects_invalid_utf8() {
        let upload = UploadedCv {
            filename: "cv.txt".to_string(),
            bytes: Bytes::from_static(&[0x43, 0x56, 0xff]),
        };
        assert!(matches!(upload.into_text(), Err(AppError::Decode(_))));
    }
}
