//! Config command - configuration management

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::args::{ConfigArgs, ConfigCommands};
use crate::config::AppConfig;

const NEXT_STEPS: &str = "\
Next steps:
  1. Choose an LLM provider and export its API key (e.g. GEMINI_API_KEY)
  2. Set publish.provider = \"x\" and export the four X_* OAuth variables
  3. Run 'tweet-composer doctor' to validate your setup
  4. Run 'tweet-composer serve' and open http://127.0.0.1:8000";

pub async fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init { path, force } => {
            write_example(&path, force)?;
            println!("Created config file: {}\n\n{}", path.display(), NEXT_STEPS);
            Ok(())
        }
    }
}

/// Write the example config to `path`, refusing to clobber unless `force`
fn write_example(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, AppConfig::example_toml())
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_example_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("etc").join("config.toml");

        write_example(&path, false).unwrap();

        let written: AppConfig = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.publish.provider, "disabled");
    }

    #[test]
    fn test_write_example_respects_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine\n").unwrap();

        assert!(write_example(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        write_example(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[publish.x]"));
    }
}
