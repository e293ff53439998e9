use crate::error::{EngineError, Result};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Turns a document into plain text.
///
/// `Sync` so one extractor can serve every worker of a parallel run.
pub trait TextExtractor: Sync {
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or decoded.
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Text extraction backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|cause| EngineError::FileRead {
            path: path.to_path_buf(),
            cause,
        })?;

        // pdf-extract panics on some malformed font dictionaries.
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(&bytes))) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(EngineError::Extraction {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(payload) => Err(EngineError::Extraction {
                path: path.to_path_buf(),
                message: format!("extractor panicked: {}", panic_message(payload.as_ref())),
            }),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

impl<F> TextExtractor for F
where
    F: Fn(&Path) -> Result<String> + Sync,
{
    fn extract(&self, path: &Path) -> Result<String> {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn non_pdf_bytes_fail_to_extract() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        fs::write(&path, b"This is not a PDF").unwrap();

        let err = PdfTextExtractor.extract(&path).unwrap_err();
        assert!(matches!(err, EngineError::Extraction { .. }));
        assert!(err.is_extraction());
    }

    #[test]
    fn broken_font_dictionary_is_an_extraction_error() {
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/type0_without_descendants.pdf");
        let err = PdfTextExtractor.extract(&fixture).unwrap_err();
        assert!(matches!(err, EngineError::Extraction { .. }));
    }

    #[test]
    fn panic_payloads_become_messages() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("Descendant fonts required"));
        assert_eq!(panic_message(owned.as_ref()), "Descendant fonts required");
        let borrowed: Box<dyn Any + Send> = Box::new("bad xref");
        assert_eq!(panic_message(borrowed.as_ref()), "bad xref");
        let other: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = PdfTextExtractor.extract(&dir.path().join("gone.pdf")).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }

    #[test]
    fn closures_act_as_extractors() {
        let extractor = |p: &Path| -> Result<String> { Ok(format!("text of {}", p.display())) };
        assert_eq!(extractor.extract(Path::new("a.pdf")).unwrap(), "text of a.pdf");
    }
}
