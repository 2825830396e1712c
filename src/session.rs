//! Run state: the active options and compilation unit
//!
//! A `Session` is an explicit value owned by whoever drives a run. The
//! orchestrator borrows it mutably for the whole run and clears it on every
//! exit path, so no state survives from one run into the next.

use crate::config::{ConfigKey, ConfigValue, ParserOptions};
use crate::program::CompilationUnit;

#[derive(Debug, Default)]
pub struct Session {
    config: Option<ParserOptions>,
    unit: Option<CompilationUnit>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_config(&mut self, config: ParserOptions) {
        self.config = Some(config);
    }

    pub fn config(&self) -> Option<&ParserOptions> {
        self.config.as_ref()
    }

    /// Look up a single option. `None` means unset: either no options are
    /// installed, or the field is absent.
    pub fn get_config_item(&self, key: ConfigKey) -> Option<ConfigValue<'_>> {
        let config = self.config.as_ref()?;
        match key {
            ConfigKey::Files => config.files.as_deref().map(ConfigValue::Paths),
            ConfigKey::TargetDir => config.target_dir.as_deref().map(ConfigValue::Path),
            ConfigKey::UseRelativePaths => Some(ConfigValue::Flag(config.use_relative_paths)),
            ConfigKey::CallerBaseDir => config.caller_base_dir.as_deref().map(ConfigValue::Path),
        }
    }

    pub fn set_unit(&mut self, unit: CompilationUnit) {
        self.unit = Some(unit);
    }

    pub fn get_unit(&self) -> Option<&CompilationUnit> {
        self.unit.as_ref()
    }

    /// Drop the options and the unit
    pub fn clear(&mut self) {
        self.config = None;
        self.unit = None;
    }

    pub fn is_empty(&self) -> bool {
        self.config.is_none() && self.unit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unset() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.get_config_item(ConfigKey::UseRelativePaths).is_none());
        assert!(session.get_unit().is_none());
    }

    #[test]
    fn test_config_items() {
        let mut session = Session::new();
        session.set_config(ParserOptions::with_files(["a.ts", "b.ts"]).relative_to("/base"));

        let files = session
            .get_config_item(ConfigKey::Files)
            .and_then(|value| value.as_paths())
            .unwrap();
        assert_eq!(files, ["a.ts".to_string(), "b.ts".to_string()]);
        assert_eq!(
            session
                .get_config_item(ConfigKey::UseRelativePaths)
                .and_then(|value| value.as_flag()),
            Some(true)
        );
        assert_eq!(
            session
                .get_config_item(ConfigKey::CallerBaseDir)
                .and_then(|value| value.as_path()),
            Some("/base")
        );
        assert!(session.get_config_item(ConfigKey::TargetDir).is_none());
    }

    #[test]
    fn test_clear_resets_both_fields() {
        let mut session = Session::new();
        session.set_config(ParserOptions::with_target_dir("./src"));
        session.set_unit(CompilationUnit::build(&[]).unwrap());
        assert!(!session.is_empty());

        session.clear();

        assert!(session.is_empty());
        assert!(session.config().is_none());
        assert!(session.get_unit().is_none());
    }
}
