use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 4173;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RepasoConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("repaso.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("repaso.db")
}

/// Resolution order: flag, then repaso.toml, then repaso.db.
pub fn resolve_database(flag: Option<PathBuf>, config: Option<&RepasoConfig>) -> PathBuf {
    flag.or_else(|| config.and_then(|c| c.database.as_ref().map(PathBuf::from)))
        .unwrap_or_else(default_database_path)
}

/// Resolution order: flag, then repaso.toml, then `DEFAULT_PORT`.
pub fn resolve_port(flag: Option<u16>, config: Option<&RepasoConfig>) -> u16 {
    flag.or_else(|| config.and_then(|c| c.port)).unwrap_or(DEFAULT_PORT)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<RepasoConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: RepasoConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &RepasoConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
