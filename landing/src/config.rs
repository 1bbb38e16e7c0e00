//! Content override file support.
//!
//! An optional TOML (or JSON, by `.json` extension) file can replace parts of
//! the built-in [`Content`]:
//!
//! ```toml
//! [site]
//! name = "Impact Makers Utrecht"
//!
//! [[nav]]
//! label = "Home"
//! href = "#home"
//!
//! [[updates]]
//! src = "/cards/meetup.png"
//! href = "https://www.instagram.com/mimi_moto_ccfa/"
//! ```
//!
//! A key that is missing keeps the built-in value. A key that is present
//! always replaces it after normalization, so `nav = "oops"` (or
//! `"nav": null` in JSON) yields an empty menu rather than an error.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::content::{Content, SiteInfo};
use crate::normalize::normalize;

/// Failure to read or parse an override file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Syntax of an override file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// `.json` is JSON; anything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Parse override text into an untyped document.
pub fn parse_overrides(text: &str, format: Format) -> Result<Value, String> {
    match format {
        Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    }
}

impl Content {
    /// Apply an override document on top of `self`.
    ///
    /// Collections go through [`normalize`]; `site` is merged field by field
    /// and ignored with a warning when it is not a table.
    pub fn with_overrides(mut self, overrides: &Value) -> Self {
        let Some(table) = overrides.as_object() else {
            tracing::warn!("override document is not a table, keeping built-in content");
            return self;
        };

        if table.contains_key("nav") {
            self.nav = normalize(table.get("nav"));
        }
        if table.contains_key("updates") {
            self.updates = normalize(table.get("updates"));
        }
        if let Some(site) = table.get("site") {
            match merge_site(&self.site, site) {
                Ok(merged) => self.site = merged,
                Err(e) => tracing::warn!("ignoring [site] overrides: {}", e),
            }
        }

        self
    }

    /// Built-in content with overrides from `path` applied.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides =
            parse_overrides(&text, Format::from_path(path)).map_err(|message| ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            })?;

        tracing::debug!(path = %path.display(), "applying content overrides");
        Ok(Content::default().with_overrides(&overrides))
    }
}

/// Overlay the keys of `overrides` onto `base`.
fn merge_site(base: &SiteInfo, overrides: &Value) -> Result<SiteInfo, serde_json::Error> {
    let mut merged = serde_json::to_value(base)?;
    if let (Some(target), Some(source)) = (merged.as_object_mut(), overrides.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    } else {
        return Err(serde::de::Error::custom("expected a table"));
    }
    serde_json::from_value(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{NavEntry, UpdateEntry};
    use serde_json::json;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{}", body).expect("write config");
        path
    }

    #[test]
    fn empty_document_keeps_defaults() {
        let content = Content::default().with_overrides(&json!({}));
        assert_eq!(content, Content::default());
    }

    #[test]
    fn null_nav_becomes_empty() {
        let content = Content::default().with_overrides(&json!({ "nav": null }));
        assert!(content.nav.is_empty());
        assert_eq!(content.updates.len(), 6);
    }

    #[test]
    fn malformed_updates_become_empty() {
        let content = Content::default().with_overrides(&json!({ "updates": { "src": "/a.jpg" } }));
        assert!(content.updates.is_empty());
    }

    #[test]
    fn bad_site_is_ignored() {
        let content = Content::default().with_overrides(&json!({ "site": ["not", "a", "table"] }));
        assert_eq!(content.site, SiteInfo::default());

        let content = Content::default().with_overrides(&json!({ "site": { "name": 7 } }));
        assert_eq!(content.site, SiteInfo::default());
    }

    #[test]
    fn site_fields_merge() {
        let content = Content::default().with_overrides(&json!({ "site": { "tagline": "Do More Good" } }));
        assert_eq!(content.site.tagline, "Do More Good");
        assert_eq!(content.site.name, SiteInfo::default().name);
    }

    #[test]
    fn non_table_document_keeps_defaults() {
        let content = Content::default().with_overrides(&json!([1, 2, 3]));
        assert_eq!(content, Content::default());
    }

    #[test]
    fn load_toml_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(
            &temp,
            "landing.toml",
            r##"
[[nav]]
label = "Home"
href = "#home"

[[updates]]
src = "/a.jpg"
href = "https://example.org"
"##,
        );

        let content = Content::load_from_path(&path).expect("load config");
        assert_eq!(content.nav.as_slice(), &[NavEntry::new("Home", "#home")]);
        assert_eq!(
            content.updates.as_slice(),
            &[UpdateEntry::new("/a.jpg", "https://example.org")]
        );
    }

    #[test]
    fn load_json_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(&temp, "landing.json", r#"{ "nav": [], "updates": null }"#);

        let content = Content::load_from_path(&path).expect("load config");
        assert!(content.nav.is_empty());
        assert!(content.updates.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = Content::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn invalid_syntax_is_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(&temp, "broken.toml", "[[nav]\nlabel = ");
        let err = Content::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("landing")), Format::Toml);
    }
}
