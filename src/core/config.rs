use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (defaults applied) as YAML
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report fields missing from the file on disk; returns them
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `rworktime init`)",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        // rejects malformed values too, not just malformed YAML
        Config::parse(&content)?;
        let missing = Config::missing_fields(&content)?;

        if missing.is_empty() {
            messages::success("Configuration file is complete");
        } else {
            for field in &missing {
                messages::warning(format!("Missing field '{}' (default value in use)", field));
            }
        }

        Ok(missing)
    }

    /// Open the config file in `editor`, then $EDITOR/$VISUAL, then the
    /// platform default
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());
        debug!(editor = %requested, path = %path.display(), "opening configuration file");

        if Self::run_editor(&requested, path) {
            messages::success(format!(
                "Configuration file edited successfully using '{}'",
                requested
            ));
            return Ok(());
        }

        if requested == default_editor {
            return Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                requested
            )));
        }

        messages::warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            requested, default_editor
        ));

        if Self::run_editor(&default_editor, path) {
            messages::success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            return Ok(());
        }

        Err(AppError::Config(format!(
            "failed to edit configuration file using '{}'",
            default_editor
        )))
    }

    fn run_editor(editor: &str, path: &Path) -> bool {
        Command::new(editor)
            .arg(path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}
