//! Client-side input validation
//!
//! Convenience checks run before anything touches the network. The backend
//! enforces the same limits independently; nothing here is a security
//! boundary.

/// Maximum accepted resume size (16 MiB, matching the backend upload cap)
pub const MAX_RESUME_BYTES: usize = 16 * 1024 * 1024;

/// The only accepted resume MIME type
pub const PDF_MIME: &str = "application/pdf";

/// Rejected user input, with the exact message shown on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// No file selected at submit time
    NoFile,
    /// Selected file is not a PDF
    NotPdf { mime: String },
    /// Selected file exceeds the upload cap
    TooLarge { size: usize, max: usize },
    /// Job description empty after trimming
    EmptyDescription,
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFile => write!(f, "Please select a resume file"),
            Self::NotPdf { .. } => write!(f, "Only PDF files are allowed"),
            Self::TooLarge { .. } => write!(f, "File size must be less than 16MB"),
            Self::EmptyDescription => write!(f, "Please enter a job description"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Check a selected resume against the MIME and size constraints
///
/// Exactly [`MAX_RESUME_BYTES`] is accepted; only sizes past the cap fail.
pub fn check_resume_file(mime: &str, size: usize) -> Result<(), UploadError> {
    if mime != PDF_MIME {
        return Err(UploadError::NotPdf {
            mime: mime.to_string(),
        });
    }

    if size > MAX_RESUME_BYTES {
        return Err(UploadError::TooLarge {
            size,
            max: MAX_RESUME_BYTES,
        });
    }

    Ok(())
}

/// Check that a job description is non-empty after trimming
pub fn check_job_description(text: &str) -> Result<(), UploadError> {
    if text.trim().is_empty() {
        return Err(UploadError::EmptyDescription);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf_under_cap() {
        assert!(check_resume_file(PDF_MIME, 1024).is_ok());
    }

    #[test]
    fn test_accepts_pdf_at_exact_cap() {
        assert!(check_resume_file(PDF_MIME, MAX_RESUME_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_pdf_over_cap() {
        let result = check_resume_file(PDF_MIME, MAX_RESUME_BYTES + 1);
        assert!(matches!(result, Err(UploadError::TooLarge { .. })));
    }

    #[test]
    fn test_rejects_non_pdf_mime() {
        let result = check_resume_file("image/png", 1024);
        assert!(matches!(result, Err(UploadError::NotPdf { .. })));
    }

    #[test]
    fn test_rejects_empty_mime() {
        assert!(check_resume_file("", 1024).is_err());
    }

    #[test]
    fn test_rejects_empty_description() {
        assert!(check_job_description("").is_err());
        assert!(check_job_description("   \n\t ").is_err());
    }

    #[test]
    fn test_accepts_nonempty_description() {
        assert!(check_job_description("Senior Rust Engineer").is_ok());
        assert!(check_job_description("  x  ").is_ok());
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(UploadError::NoFile.to_string(), "Please select a resume file");
        assert_eq!(
            UploadError::NotPdf {
                mime: "text/plain".to_string()
            }
            .to_string(),
            "Only PDF files are allowed"
        );
        assert_eq!(
            UploadError::TooLarge {
                size: MAX_RESUME_BYTES + 1,
                max: MAX_RESUME_BYTES
            }
            .to_string(),
            "File size must be less than 16MB"
        );
        assert_eq!(
            UploadError::EmptyDescription.to_string(),
            "Please enter a job description"
        );
    }
}
