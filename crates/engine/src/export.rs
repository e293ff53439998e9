use crate::error::{EngineError, Result};
use serde::Serialize;
use std::path::Path;

pub const DEFAULT_INDENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// One entry per line, nested levels indented by `indent` spaces.
    Pretty { indent: usize },
    /// No whitespace at all.
    Minified,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self::Pretty {
            indent: DEFAULT_INDENT,
        }
    }
}

impl JsonStyle {
    #[must_use]
    pub const fn new(minify: bool, indent: usize) -> Self {
        if minify { Self::Minified } else { Self::Pretty { indent } }
    }
}

/// Serializes a histogram (or totals) in the requested style.
///
/// # Errors
///
/// Returns [`EngineError::Json`] if serialization fails.
pub fn to_json<T>(value: &T, style: JsonStyle) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    match style {
        JsonStyle::Minified => serde_json::to_writer(&mut buf, value)?,
        JsonStyle::Pretty { indent } => {
            let indent = vec![b' '; indent];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            value.serialize(&mut ser)?;
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes [`to_json`] output to `path`, followed by a newline.
///
/// # Errors
///
/// Returns [`EngineError::FileWrite`] if the file cannot be written.
pub fn write_json<T>(value: &T, style: JsonStyle, path: &Path) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let mut json = to_json(value, style)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|cause| EngineError::FileWrite {
        path: path.to_path_buf(),
        cause,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyword_histogram_core::Histogram;

    fn sample() -> Histogram {
        let mut h = Histogram::new();
        h.add("doc.pdf", "AI", 2);
        h
    }

    #[test]
    fn minified_has_no_whitespace() {
        assert_eq!(to_json(&sample(), JsonStyle::Minified).unwrap(), r#"{"doc.pdf":{"AI":2}}"#);
    }

    #[test]
    fn pretty_uses_default_indent_of_four() {
        let json = to_json(&sample(), JsonStyle::default()).unwrap();
        assert_eq!(json, "{\n    \"doc.pdf\": {\n        \"AI\": 2\n    }\n}");
    }

    #[test]
    fn pretty_honours_custom_indent() {
        let json = to_json(&sample(), JsonStyle::Pretty { indent: 2 }).unwrap();
        assert_eq!(json, "{\n  \"doc.pdf\": {\n    \"AI\": 2\n  }\n}");
    }

    #[test]
    fn style_from_flags() {
        assert_eq!(JsonStyle::new(true, 8), JsonStyle::Minified);
        assert_eq!(JsonStyle::new(false, 8), JsonStyle::Pretty { indent: 8 });
    }

    #[test]
    fn write_json_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&sample(), JsonStyle::Minified, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"doc.pdf\":{\"AI\":2}}\n");
    }
}
