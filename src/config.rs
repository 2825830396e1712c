//! Parser options
//!
//! Options are supplied once per run. They deserialize from the same
//! camelCase JSON shape callers already use (`files`, `targetDir`,
//! `useRelativePaths`, `callerBaseDir`).

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    /// Explicit file set to compile. Takes priority over `target_dir`.
    pub files: Option<Vec<String>>,
    /// Directory to enumerate for `.ts`/`.tsx` sources.
    pub target_dir: Option<String>,
    /// Interpret input paths relative to `caller_base_dir`.
    pub use_relative_paths: bool,
    /// Base directory for relative inputs. Required when `use_relative_paths` is set.
    pub caller_base_dir: Option<String>,
}

impl ParserOptions {
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: Some(files.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn with_target_dir(dir: impl Into<String>) -> Self {
        Self {
            target_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    /// Resolve inputs relative to `base` instead of the working directory.
    pub fn relative_to(mut self, base: impl Into<String>) -> Self {
        self.use_relative_paths = true;
        self.caller_base_dir = Some(base.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidOptions(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::InvalidOptions(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// The explicit file list, if present and non-empty.
    pub fn file_list(&self) -> Option<&[String]> {
        self.files.as_deref().filter(|files| !files.is_empty())
    }

    /// The target directory, if present and non-empty.
    pub fn target_dir(&self) -> Option<&str> {
        self.target_dir.as_deref().filter(|dir| !dir.is_empty())
    }

    /// The caller base directory, if present and non-empty.
    pub fn caller_base_dir(&self) -> Option<&str> {
        self.caller_base_dir.as_deref().filter(|dir| !dir.is_empty())
    }
}

/// Addressable option fields, for [`crate::Session::get_config_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Files,
    TargetDir,
    UseRelativePaths,
    CallerBaseDir,
}

/// A borrowed option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValue<'a> {
    Paths(&'a [String]),
    Path(&'a str),
    Flag(bool),
}

impl ConfigValue<'_> {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ConfigValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl<'a> ConfigValue<'a> {
    pub fn as_path(&self) -> Option<&'a str> {
        match self {
            ConfigValue::Path(path) => Some(*path),
            _ => None,
        }
    }

    pub fn as_paths(&self) -> Option<&'a [String]> {
        match self {
            ConfigValue::Paths(paths) => Some(*paths),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_options() {
        let options = ParserOptions::from_json_str(
            r#"{"files":["a.ts"],"useRelativePaths":true,"callerBaseDir":"/work"}"#,
        )
        .unwrap();

        assert_eq!(options.files, Some(vec!["a.ts".to_string()]));
        assert!(options.use_relative_paths);
        assert_eq!(options.caller_base_dir(), Some("/work"));
        assert_eq!(options.target_dir(), None);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let options = ParserOptions::from_json_str("{}").unwrap();
        assert_eq!(options, ParserOptions::default());
        assert!(!options.use_relative_paths);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ParserOptions::from_json_str(r#"{"files": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidOptions(_)));
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let options = ParserOptions {
            files: Some(vec![]),
            target_dir: Some(String::new()),
            use_relative_paths: true,
            caller_base_dir: Some(String::new()),
        };

        assert!(options.file_list().is_none());
        assert!(options.target_dir().is_none());
        assert!(options.caller_base_dir().is_none());
    }

    #[test]
    fn test_reads_options_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parserr.json");
        std::fs::write(&path, r#"{"targetDir":"./src"}"#).unwrap();

        let options = ParserOptions::from_json_file(&path).unwrap();
        assert_eq!(options.target_dir(), Some("./src"));
    }
}
