//! Run configuration.
//!
//! Options come from command-line flags, a JSON config file, or both. A
//! single resolution function merges them with one precedence rule:
//! **command-line flags win over config-file values**.
//!
//! ## Config File
//!
//! A JSON object with short or long key spellings:
//!
//! ```json
//! {
//!   "input": "./docs",
//!   "stylesheet": "https://example.com/site.css"
//! }
//! ```
//!
//! `i` and `s` are accepted as aliases for `input` and `stylesheet`. Unknown
//! keys are rejected to catch typos early. An empty object is an error — a
//! config file that configures nothing is almost certainly a mistake.
//!
//! An input path must be supplied by at least one source; everything else is
//! optional.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config file is empty: {0}")]
    Empty(PathBuf),
    #[error("no input path given (use --input or an \"input\" key in the config file)")]
    MissingInput,
}

/// Fully resolved options for one generation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source file or directory to process.
    pub input: PathBuf,
    /// Stylesheet URL linked from every generated page. `None` renders an
    /// empty `href`.
    pub stylesheet: Option<String>,
    /// Output directory, deleted and recreated on every run.
    pub output: PathBuf,
}

/// On-disk JSON config shape. Sparse: every key optional, aliases accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(alias = "i")]
    input: Option<PathBuf>,
    #[serde(alias = "s")]
    stylesheet: Option<String>,
}

/// Merge command-line values with an optional JSON config file.
///
/// Flags take precedence over file values. Fails when the config file is
/// unreadable, not valid JSON, an empty object, or when no source supplies
/// an input path.
pub fn resolve(
    input: Option<PathBuf>,
    stylesheet: Option<String>,
    config_path: Option<&Path>,
    output: PathBuf,
) -> Result<RunConfig, ConfigError> {
    let file = match config_path {
        Some(path) => load_config_file(path)?,
        None => ConfigFile::default(),
    };

    Ok(RunConfig {
        input: input.or(file.input).ok_or(ConfigError::MissingInput)?,
        stylesheet: stylesheet.or(file.stylesheet),
        output,
    })
}

fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let raw = fs::read_to_string(path)?;
    let file: ConfigFile = serde_json::from_str(&raw)?;
    if file.input.is_none() && file.stylesheet.is_none() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_source;
    use tempfile::TempDir;

    #[test]
    fn flags_alone_resolve() {
        let cfg = resolve(
            Some(PathBuf::from("docs")),
            Some("style.css".into()),
            None,
            PathBuf::from("dist"),
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("docs"));
        assert_eq!(cfg.stylesheet.as_deref(), Some("style.css"));
        assert_eq!(cfg.output, PathBuf::from("dist"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = resolve(None, None, None, PathBuf::from("dist")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInput));
    }

    #[test]
    fn config_file_supplies_values() {
        let tmp = TempDir::new().unwrap();
        let path = write_source(
            tmp.path(),
            "ssg.json",
            r#"{"input": "docs", "stylesheet": "s.css"}"#,
        );
        let cfg = resolve(None, None, Some(&path), PathBuf::from("dist")).unwrap();
        assert_eq!(cfg.input, PathBuf::from("docs"));
        assert_eq!(cfg.stylesheet.as_deref(), Some("s.css"));
    }

    #[test]
    fn short_key_aliases_accepted() {
        let tmp = TempDir::new().unwrap();
        let path = write_source(tmp.path(), "ssg.json", r#"{"i": "docs", "s": "s.css"}"#);
        let cfg = resolve(None, None, Some(&path), PathBuf::from("dist")).unwrap();
        assert_eq!(cfg.input, PathBuf::from("docs"));
        assert_eq!(cfg.stylesheet.as_deref(), Some("s.css"));
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_source(
            tmp.path(),
            "ssg.json",
            r#"{"input": "from-file", "stylesheet": "file.css"}"#,
        );
        let cfg = resolve(
            Some(PathBuf::from("from-flag")),
            Some("flag.css".into()),
            Some(&path),
            PathBuf::from("dist"),
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("from-flag"));
        assert_eq!(cfg.stylesheet.as_deref(), Some("flag.css"));
    }

    #[test]
    fn config_file_input_with_flag_stylesheet() {
        let tmp = TempDir::new().unwrap();
        let path = write_source(tmp.path(), "ssg.json", r#"{"input": "docs"}"#);
        let cfg = resolve(None, Some("s.css".into()), Some(&path), PathBuf::from("dist")).unwrap();
        assert_eq!(cfg.input, PathBuf::from("docs"));
        assert_eq!(cfg.stylesheet.as_deref(), Some("s.css"));
    }

    #[test]
    fn stylesheet_only_config_still_needs_input() {
        let tmp = TempDir::new().unwrap();
        let path = write_source(tmp.path(), "ssg.json", r#"{"stylesheet": "s.css"}"#);
        let err = resolve(None, None, Some(&path), PathBuf::from("dist")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInput));
    }

    #[test]
    fn empty_object_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_source(tmp.path(), "ssg.json", "{}");
        let err = resolve(None, None, Some(&path), PathBuf::from("dist")).unwrap_err();
        assert!(matches!(err, ConfigError::Empty(_)));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_source(tmp.path(), "ssg.json", "not json");
        let err = resolve(None, None, Some(&path), PathBuf::from("dist")).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_source(
            tmp.path(),
            "ssg.json",
            r#"{"input": "docs", "stylsheet": "typo.css"}"#,
        );
        let err = resolve(None, None, Some(&path), PathBuf::from("dist")).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn unreadable_config_file_is_io_error() {
        let err = resolve(
            None,
            None,
            Some(Path::new("/no/such/config.json")),
            PathBuf::from("dist"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
