/// Optional TOML configuration: tick rate, log level, grid seed and preview defaults.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::color::Color;
use crate::types::{ColorGrid, RoleDefaults};

const DEFAULT_TICK_RATE_MS: u64 = 250;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Config as it appears on disk. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub tick_rate_ms: Option<u64>,
    pub log_level: Option<String>,
    pub seed: Option<Vec<String>>,
    #[serde(default)]
    pub defaults: FileRoleDefaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileRoleDefaults {
    pub header_background: Option<String>,
    pub header_text: Option<String>,
    pub menu_background: Option<String>,
    pub body_background: Option<String>,
    pub body_text: Option<String>,
}

/// Validated runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub log_level: String,
    pub seed: ColorGrid,
    pub defaults: RoleDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed: ColorGrid::seed(),
            defaults: RoleDefaults::default(),
        }
    }
}

/// Returns `<config_dir>/palettr/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("palettr").join("config.toml"))
}

/// Loads the config from `path_override` or the default location.
///
/// A missing default file yields the defaults; a missing explicit file is an error.
pub fn load(path_override: Option<&Path>) -> Result<Config> {
    let path = match path_override {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse(text: &str) -> Result<Config> {
    let file: FileConfig = toml::from_str(text)?;
    resolve(file)
}

fn resolve(file: FileConfig) -> Result<Config> {
    let mut config = Config::default();

    if let Some(tick_rate_ms) = file.tick_rate_ms {
        if tick_rate_ms == 0 {
            bail!("tick_rate_ms must be greater than 0");
        }
        config.tick_rate_ms = tick_rate_ms;
    }
    if let Some(level) = file.log_level {
        EnvFilter::try_new(&level).with_context(|| format!("log_level: bad filter {level:?}"))?;
        config.log_level = level;
    }
    if let Some(seed) = file.seed {
        let colors = seed
            .iter()
            .map(|value| parse_color("seed", value))
            .collect::<Result<Vec<_>>>()?;
        config.seed = ColorGrid::from_colors(colors).context("seed")?;
    }

    let defaults = file.defaults;
    let targets = [
        (defaults.header_background, &mut config.defaults.header_background, "defaults.header_background"),
        (defaults.header_text, &mut config.defaults.header_text, "defaults.header_text"),
        (defaults.menu_background, &mut config.defaults.menu_background, "defaults.menu_background"),
        (defaults.body_background, &mut config.defaults.body_background, "defaults.body_background"),
        (defaults.body_text, &mut config.defaults.body_text, "defaults.body_text"),
    ];
    for (value, target, key) in targets {
        if let Some(value) = value {
            *target = parse_color(key, &value)?;
        }
    }

    Ok(config)
}

fn parse_color(key: &str, value: &str) -> Result<Color> {
    value
        .parse::<Color>()
        .with_context(|| format!("{key}: bad color {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn reads_every_key() {
        let config = parse(
            r##"
tick_rate_ms = 100
log_level = "debug"
seed = [
    "#000000", "#111111", "#222222", "#333333",
    "#444444", "#555555", "#666666", "#777777",
    "#888888", "#999999", "#aaaaaa", "#bbbbbb",
]

[defaults]
header_background = "#102030"
body_text = "#FEFEFE"
"##,
        )
        .unwrap();

        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.seed.colors()[10].to_string(), "#AAAAAA");
        assert_eq!(config.defaults.header_background.to_string(), "#102030");
        assert_eq!(config.defaults.body_text.to_string(), "#FEFEFE");
        assert_eq!(config.defaults.menu_background.to_string(), "#999999");
    }

    #[test]
    fn rejects_short_seed() {
        let err = parse(r##"seed = ["#000000", "#FFFFFF"]"##).unwrap_err();
        assert!(format!("{err:#}").contains("exactly 12 colors"));
    }

    #[test]
    fn rejects_bad_default_color() {
        let err = parse("[defaults]\nheader_text = \"white\"").unwrap_err();
        assert!(format!("{err:#}").contains("defaults.header_text"));
    }

    #[test]
    fn rejects_bad_log_level() {
        let err = parse("log_level = \"palettr=loudest\"").unwrap_err();
        assert!(format!("{err:#}").contains("log_level"));
        let config = parse("log_level = \"palettr=trace,warn\"").unwrap();
        assert_eq!(config.log_level, "palettr=trace,warn");
    }

    #[test]
    fn rejects_zero_tick_rate_and_unknown_keys() {
        assert!(parse("tick_rate_ms = 0").is_err());
        assert!(parse("colour = \"#FFFFFF\"").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load(Some(Path::new("/definitely/not/here/palettr.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
