//! Session setup
//!
//! Wires configuration, seed data and the audit sink into a ready store.

use std::path::Path;

use crate::audit::{AuditLogger, AuditTrail};
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::seed;
use crate::store::ExpenseStore;

/// Build the session's store
///
/// The seed comes from `seed_override`, then `settings.seed_file`, then the
/// built-in dataset.
pub fn open_store(
    paths: &ExpensePaths,
    settings: &Settings,
    seed_override: Option<&Path>,
) -> ExpenseResult<ExpenseStore> {
    let seed_path = seed_override.or(settings.seed_file.as_deref());
    let days = seed::load_or_builtin(seed_path)?;

    let trail = if settings.audit_log_enabled {
        AuditTrail::with_sink(AuditLogger::new(paths.audit_log()))
    } else {
        AuditTrail::new()
    };

    Ok(ExpenseStore::with_trail(days, trail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const ONE_DAY: &str = r#"[{"date": "Only day", "items": [{"desc": "Paint", "cost": 900}]}]"#;

    #[test]
    fn test_builtin_when_nothing_configured() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = open_store(&paths, &Settings::default(), None).unwrap();
        assert_eq!(store.len(), seed::builtin_days().len());
    }

    #[test]
    fn test_override_beats_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let seed_path = temp_dir.path().join("one.json");
        std::fs::write(&seed_path, ONE_DAY).unwrap();

        let mut settings = Settings::default();
        settings.seed_file = Some(PathBuf::from("/does/not/exist.json"));

        let store = open_store(&paths, &settings, Some(&seed_path)).unwrap();
        assert_eq!(store.len(), 1);
        assert!(open_store(&paths, &settings, None).is_err());
    }

    #[test]
    fn test_audit_sink_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.audit_log_enabled = true;

        let mut store = open_store(&paths, &settings, None).unwrap();
        store.toggle_day_paid(0).unwrap();

        let logged = AuditLogger::new(paths.audit_log()).read_all().unwrap();
        assert_eq!(logged.len(), 1);
    }
}
