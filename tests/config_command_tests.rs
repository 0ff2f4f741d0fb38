use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::repository::*;

#[cfg(test)]
mod config_command_tests {
    use super::*;

    #[test]
    fn test_config_shows_defaults_without_file() -> anyhow::Result<()> {
        let config_dir = tempfile::TempDir::new()?;

        latr_cmd(config_dir.path())?
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"excluded_dirs\""))
            .stdout(predicate::str::contains("node_modules"))
            .stdout(predicate::str::contains("\"default_mode\": \"git\""));

        assert!(!config_dir.path().join("config.json").exists());
        Ok(())
    }

    #[test]
    fn test_config_init_writes_file_once() -> anyhow::Result<()> {
        let config_dir = tempfile::TempDir::new()?;
        let config_file = config_dir.path().join("config.json");

        latr_cmd(config_dir.path())?
            .args(["config", "--init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote default config"));
        assert!(config_file.exists());

        latr_cmd(config_dir.path())?
            .args(["config", "--init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_reported() -> anyhow::Result<()> {
        let config_dir = tempfile::TempDir::new()?;
        std::fs::write(config_dir.path().join("config.json"), "{ not json")?;

        latr_cmd(config_dir.path())?
            .arg("config")
            .assert()
            .failure();
        Ok(())
    }
}
