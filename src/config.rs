use std::{
    env,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "ROVIEW_CONFIG";
const LOCAL_CONFIG: &str = "roview.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Services document fed into the menu.
    #[serde(default)]
    pub services: Option<PathBuf>,

    /// Layout document built by `roview layout`.
    #[serde(default)]
    pub layout: Option<PathBuf>,

    /// How many services the menu waits for; defaults to all discovered.
    #[serde(default)]
    pub menu_limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub services: Option<PathBuf>,
    pub layout: Option<PathBuf>,
    pub menu_limit: Option<usize>,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub services: Option<&'a Path>,
    pub layout: Option<&'a Path>,
    pub menu_limit: Option<usize>,
}

pub fn load_optional() -> Result<Option<Config>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_from(&path).map(Some)
}

pub fn load_from(path: &Path) -> Result<Config> {
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let mut cfg: Config =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;

    // Relative paths in the file are relative to the file itself.
    if let Some(base) = path.parent() {
        cfg.services = cfg.services.map(|p| rebase(base, p));
        cfg.layout = cfg.layout.map(|p| rebase(base, p));
    }
    Ok(cfg)
}

fn rebase(base: &Path, p: PathBuf) -> PathBuf {
    if p.is_absolute() || base.as_os_str().is_empty() {
        p
    } else {
        base.join(p)
    }
}

/// Env override, then `./roview.json`, then the per-user config dir.
pub fn resolve_config_path() -> Option<PathBuf> {
    let from_env = env::var(CONFIG_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    if from_env.is_some() {
        return from_env;
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }

    user_config_dir().map(|dir| dir.join("config.json"))
}

fn user_config_dir() -> Option<PathBuf> {
    env::var_os("APPDATA")
        .map(|appdata| PathBuf::from(appdata).join("roview"))
        .or_else(|| {
            env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("roview"))
        })
}

fn no_config_path() -> anyhow::Error {
    anyhow!("No config path available (set {CONFIG_ENV} or ensure APPDATA/HOME is present)")
}

pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let path = resolve_config_path().ok_or_else(no_config_path)?;
    write_template(&path)?;
    Ok(path)
}

/// Writes an empty config at `path` unless one is already there.
pub fn write_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    if !path.exists() {
        let template = serde_json::json!({
            "services": null,
            "layout": null,
            "menu_limit": null
        });
        let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
        s.push('\n');
        fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

pub fn resolve(config: Option<&Config>, overrides: &Overrides<'_>) -> ResolvedConfig {
    let from_file = config.cloned().unwrap_or_default();
    ResolvedConfig {
        services: overrides
            .services
            .map(Path::to_path_buf)
            .or(from_file.services),
        layout: overrides.layout.map(Path::to_path_buf).or(from_file.layout),
        menu_limit: overrides.menu_limit.or(from_file.menu_limit),
    }
}
