use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use log::{debug, warn};
use std::path::{Path, PathBuf};

const PDF_SUFFIX: &[u8] = b".pdf";

/// `true` when the file name ends with `.pdf`, ignoring ASCII case. Names
/// that are not valid UTF-8 are still recognised.
#[must_use]
pub fn is_pdf(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let bytes = name.as_encoded_bytes();
        bytes
            .len()
            .checked_sub(PDF_SUFFIX.len())
            .and_then(|start| bytes.get(start..))
            .is_some_and(|tail| tail.eq_ignore_ascii_case(PDF_SUFFIX))
    })
}

/// Recursively collects every PDF under `root`, sorted by path.
///
/// # Errors
///
/// Returns [`EngineError::RootNotFound`] if `root` is not a directory and
/// [`EngineError::NoPdfFound`] if the walk finds no PDF at all. Entries that
/// cannot be read are logged and skipped.
pub fn discover_pdfs(root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(EngineError::RootNotFound {
            root: root.to_path_buf(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let mut found = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if is_pdf(entry.path()) {
            debug!("found {}", entry.path().display());
            found.push(entry.into_path());
        }
    }

    if found.is_empty() {
        return Err(EngineError::NoPdfFound {
            root: root.to_path_buf(),
        });
    }

    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn recognises_pdf_extension_in_any_case() {
        assert!(is_pdf(Path::new("a/report.pdf")));
        assert!(is_pdf(Path::new("REPORT.PDF")));
        assert!(is_pdf(Path::new("mixed.PdF")));
        assert!(!is_pdf(Path::new("report.pdf.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn finds_pdfs_with_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let name = OsStr::from_bytes(b"rapor\xfc.pdf");
        fs::write(dir.path().join(name), b"x").unwrap();

        assert!(is_pdf(Path::new(name)));
        let found = discover_pdfs(dir.path(), &WalkOptions::default()).unwrap();
        assert_eq!(found, vec![dir.path().join(name)]);
    }

    #[test]
    fn finds_pdfs_recursively_and_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("b.pdf"), b"x").unwrap();
        fs::write(dir.path().join("nested/A.PDF"), b"x").unwrap();
        fs::write(dir.path().join("nested/deeper/c.Pdf"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let found = discover_pdfs(dir.path(), &WalkOptions::default()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("b.pdf"),
                PathBuf::from("nested/A.PDF"),
                PathBuf::from("nested/deeper/c.Pdf"),
            ]
        );
    }

    #[test]
    fn includes_hidden_directories_by_default() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".archive")).unwrap();
        fs::write(dir.path().join(".archive/old.pdf"), b"x").unwrap();

        assert_eq!(discover_pdfs(dir.path(), &WalkOptions::default()).unwrap().len(), 1);

        let skip_hidden = WalkOptions {
            hidden: false,
            ..WalkOptions::default()
        };
        assert!(matches!(
            discover_pdfs(dir.path(), &skip_hidden),
            Err(EngineError::NoPdfFound { .. })
        ));
    }

    #[test]
    fn max_depth_limits_recursion() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("top.pdf"), b"x").unwrap();
        fs::write(dir.path().join("sub/inner.pdf"), b"x").unwrap();

        let shallow = WalkOptions {
            max_depth: Some(1),
            ..WalkOptions::default()
        };
        assert_eq!(discover_pdfs(dir.path(), &shallow).unwrap().len(), 1);
    }

    #[test]
    fn directory_without_pdfs_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();
        fs::write(dir.path().join("b.docx"), b"x").unwrap();

        let err = discover_pdfs(dir.path(), &WalkOptions::default()).unwrap_err();
        assert!(matches!(err, EngineError::NoPdfFound { .. }));
        assert!(err.is_discovery());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let err = discover_pdfs(&dir.path().join("absent"), &WalkOptions::default()).unwrap_err();
        assert!(matches!(err, EngineError::RootNotFound { .. }));
    }
}
