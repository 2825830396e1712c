//! Path resolution
//!
//! Options select a file source through an ordered table of named strategies.
//! The first strategy whose predicate matches wins; the table ends with an
//! unconditional rejection so every option set maps to exactly one outcome.
//!
//! Turning a selected source into concrete paths is delegated to a
//! [`PathResolver`]. [`FsPathResolver`] is the filesystem-backed default.

use crate::config::ParserOptions;
use crate::error::{ConfigurationError, ParserError};
use crate::utils::file_utils::{is_excluded_dir, is_supported_file};
use crate::utils::paths::resolve_input;
use anyhow::Context;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the files of a run come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    ExplicitFiles,
    TargetDirectory,
}

#[derive(Clone, Copy)]
pub enum StrategyOutcome {
    Resolve(FileSource),
    Reject(fn() -> ConfigurationError),
}

impl std::fmt::Debug for StrategyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyOutcome::Resolve(source) => f.debug_tuple("Resolve").field(source).finish(),
            StrategyOutcome::Reject(error) => f.debug_tuple("Reject").field(&error()).finish(),
        }
    }
}

/// A predicate over options paired with what happens when it matches
#[derive(Clone, Copy)]
pub struct ResolutionStrategy {
    pub name: &'static str,
    applies: fn(&ParserOptions) -> bool,
    pub outcome: StrategyOutcome,
}

impl std::fmt::Debug for ResolutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionStrategy")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl ResolutionStrategy {
    pub fn applies(&self, options: &ParserOptions) -> bool {
        (self.applies)(options)
    }

    pub fn file_source(&self) -> Result<FileSource, ConfigurationError> {
        match self.outcome {
            StrategyOutcome::Resolve(source) => Ok(source),
            StrategyOutcome::Reject(error) => Err(error()),
        }
    }
}

/// Evaluated in order. A relative-path misconfiguration always wins, even
/// when a file list or directory is also present.
pub const STRATEGIES: &[ResolutionStrategy] = &[
    ResolutionStrategy {
        name: "relative-paths-without-base",
        applies: relative_paths_without_base,
        outcome: StrategyOutcome::Reject(missing_caller_base_dir),
    },
    ResolutionStrategy {
        name: "explicit-files",
        applies: has_explicit_files,
        outcome: StrategyOutcome::Resolve(FileSource::ExplicitFiles),
    },
    ResolutionStrategy {
        name: "target-directory",
        applies: has_target_dir,
        outcome: StrategyOutcome::Resolve(FileSource::TargetDirectory),
    },
    ResolutionStrategy {
        name: "no-strategy-matched",
        applies: always,
        outcome: StrategyOutcome::Reject(no_input),
    },
];

fn relative_paths_without_base(options: &ParserOptions) -> bool {
    options.use_relative_paths && options.caller_base_dir().is_none()
}

fn has_explicit_files(options: &ParserOptions) -> bool {
    options.file_list().is_some()
}

fn has_target_dir(options: &ParserOptions) -> bool {
    options.target_dir().is_some()
}

fn always(_: &ParserOptions) -> bool {
    true
}

fn missing_caller_base_dir() -> ConfigurationError {
    ConfigurationError::MissingCallerBaseDir
}

fn no_input() -> ConfigurationError {
    ConfigurationError::NoInput
}

/// First matching strategy. The last table entry matches everything.
pub fn select_strategy(options: &ParserOptions) -> &'static ResolutionStrategy {
    STRATEGIES
        .iter()
        .find(|strategy| strategy.applies(options))
        .unwrap_or(&STRATEGIES[STRATEGIES.len() - 1])
}

/// Turns a selected file source into concrete, normalized paths
#[async_trait]
pub trait PathResolver: Send + Sync {
    /// Normalize the explicit `files` list
    fn normalized_file_paths(&self, options: &ParserOptions) -> anyhow::Result<Vec<PathBuf>>;

    /// Enumerate source files under `target_dir`
    async fn enumerate_target_dir(&self, options: &ParserOptions) -> anyhow::Result<Vec<PathBuf>>;
}

/// Select a strategy and run it against `resolver`
pub async fn resolve_file_paths(
    options: &ParserOptions,
    resolver: &dyn PathResolver,
) -> Result<Vec<PathBuf>, ParserError> {
    let strategy = select_strategy(options);
    debug!("Path resolution strategy: {}", strategy.name);

    let paths = match strategy.file_source()? {
        FileSource::ExplicitFiles => resolver.normalized_file_paths(options),
        FileSource::TargetDirectory => resolver.enumerate_target_dir(options).await,
    };

    paths.map_err(|err| match err.downcast::<ConfigurationError>() {
        Ok(config_err) => ParserError::Configuration(config_err),
        Err(other) => ParserError::Resolve(other),
    })
}

/// Filesystem-backed resolver
///
/// Relative inputs resolve against `caller_base_dir` when `use_relative_paths`
/// is set, otherwise against the process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPathResolver;

impl FsPathResolver {
    pub fn new() -> Self {
        Self
    }

    fn base_dir(options: &ParserOptions) -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir().context("Failed to read the working directory")?;
        match options.caller_base_dir() {
            Some(base) if options.use_relative_paths => Ok(resolve_input(base, &cwd)),
            _ => Ok(cwd),
        }
    }
}

#[async_trait]
impl PathResolver for FsPathResolver {
    fn normalized_file_paths(&self, options: &ParserOptions) -> anyhow::Result<Vec<PathBuf>> {
        let base = Self::base_dir(options)?;
        let files = options.file_list().unwrap_or_default();

        let mut seen = HashSet::new();
        let paths: Vec<PathBuf> = files
            .iter()
            .map(|file| resolve_input(file, &base))
            .filter(|path| seen.insert(path.clone()))
            .collect();

        debug!("Normalized {} of {} input files", paths.len(), files.len());
        Ok(paths)
    }

    async fn enumerate_target_dir(&self, options: &ParserOptions) -> anyhow::Result<Vec<PathBuf>> {
        let base = Self::base_dir(options)?;
        let target = options
            .target_dir()
            .ok_or(ConfigurationError::NoInput)?;
        let dir = resolve_input(target, &base);

        let is_dir = tokio::fs::metadata(&dir)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(ConfigurationError::TargetDirNotFound(dir).into());
        }

        let walk_root = dir.clone();
        let paths = tokio::task::spawn_blocking(move || collect_sources(&walk_root))
            .await
            .context("Directory enumeration task failed")??;

        debug!("Enumerated {} source files under {}", paths.len(), dir.display());
        Ok(paths)
    }
}

fn collect_sources(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*", glob::Pattern::escape(&dir.to_string_lossy()));
    let entries = glob::glob(&pattern)
        .with_context(|| format!("Invalid enumeration pattern for {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("Failed to enumerate {}", dir.display()))?;
        let relative = path.strip_prefix(dir).unwrap_or(&path);
        if is_excluded_dir(relative) || !is_supported_file(&path) || !path.is_file() {
            continue;
        }
        paths.push(path);
    }

    paths.sort();
    paths.dedup();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(options: &ParserOptions) -> &'static str {
        select_strategy(options).name
    }

    #[test]
    fn test_strategy_table_order() {
        let order: Vec<&str> = STRATEGIES.iter().map(|s| s.name).collect();
        assert_eq!(
            order,
            vec![
                "relative-paths-without-base",
                "explicit-files",
                "target-directory",
                "no-strategy-matched"
            ]
        );
        assert!(matches!(
            STRATEGIES.last().unwrap().outcome,
            StrategyOutcome::Reject(_)
        ));
    }

    #[test]
    fn test_relative_paths_without_base_takes_precedence() {
        let options = ParserOptions {
            files: Some(vec!["a.ts".into()]),
            target_dir: Some("./src".into()),
            use_relative_paths: true,
            caller_base_dir: None,
        };

        assert_eq!(names(&options), "relative-paths-without-base");
        assert!(matches!(
            select_strategy(&options).file_source(),
            Err(ConfigurationError::MissingCallerBaseDir)
        ));
    }

    #[test]
    fn test_files_win_over_target_dir() {
        let options = ParserOptions {
            files: Some(vec!["a.ts".into()]),
            target_dir: Some("./src".into()),
            ..Default::default()
        };
        assert_eq!(names(&options), "explicit-files");
    }

    #[test]
    fn test_empty_files_fall_through_to_target_dir() {
        let options = ParserOptions {
            files: Some(vec![]),
            target_dir: Some("./src".into()),
            ..Default::default()
        };
        assert_eq!(names(&options), "target-directory");
    }

    #[test]
    fn test_no_input_is_rejected() {
        for options in [
            ParserOptions::default(),
            ParserOptions {
                files: Some(vec![]),
                ..Default::default()
            },
            ParserOptions::default().relative_to("/base"),
        ] {
            assert_eq!(names(&options), "no-strategy-matched");
            assert!(matches!(
                select_strategy(&options).file_source(),
                Err(ConfigurationError::NoInput)
            ));
        }
    }

    #[test]
    fn test_normalizes_relative_files_against_caller_base_dir() {
        let options =
            ParserOptions::with_files(["src/a.ts", "./src/../src/a.ts", "b.ts"]).relative_to("/work");

        let paths = FsPathResolver.normalized_file_paths(&options).unwrap();

        assert_eq!(
            paths,
            vec![PathBuf::from("/work/src/a.ts"), PathBuf::from("/work/b.ts")]
        );
    }

    #[test]
    fn test_normalizes_against_working_directory_by_default() {
        let options = ParserOptions::with_files(["a.ts"]);
        let paths = FsPathResolver.normalized_file_paths(&options).unwrap();

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(paths, vec![cwd.join("a.ts")]);
    }

    #[tokio::test]
    async fn test_enumerates_typescript_sources_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("z.ts"), "").unwrap();
        fs::write(root.join("nested/b.tsx"), "").unwrap();
        fs::write(root.join("nested/deeper/a.d.ts"), "").unwrap();
        fs::write(root.join("nested/readme.md"), "").unwrap();
        fs::write(root.join("nested/module.mts"), "").unwrap();
        fs::write(root.join("node_modules/pkg/index.ts"), "").unwrap();

        let options = ParserOptions::with_target_dir(root.to_string_lossy());
        let paths = FsPathResolver.enumerate_target_dir(&options).await.unwrap();

        assert_eq!(
            paths,
            vec![
                root.join("nested/b.tsx"),
                root.join("nested/deeper/a.d.ts"),
                root.join("z.ts"),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_target_dir_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = ParserOptions::with_target_dir("missing").relative_to(dir.path().to_string_lossy());

        let err = resolve_file_paths(&options, &FsPathResolver).await.unwrap_err();
        match err {
            ParserError::Configuration(ConfigurationError::TargetDirNotFound(path)) => {
                assert_eq!(path, dir.path().join("missing"));
            }
            other => panic!("expected TargetDirNotFound, got {other:?}"),
        }
    }
}
