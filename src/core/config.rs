use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        if !cfg.is_production() {
            warning(format!("Running against the '{}' environment", cfg.environment));
        }
        Ok(())
    }

    /// Open the file in the requested editor, falling back to the platform default.
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

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                println!(
                    "✅ Configuration file edited successfully using '{}'",
                    editor_to_use
                );
                Ok(())
            }
            _ => {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                );
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))
                    .and_then(|s| {
                        if s.success() {
                            Ok(())
                        } else {
                            Err(AppError::Config(format!(
                                "editor '{}' exited with {}",
                                default_editor, s
                            )))
                        }
                    })
            }
        }
    }
}
