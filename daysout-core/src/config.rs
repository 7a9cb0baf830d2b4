//! Optional `config.toml` settings for the report and the parser.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use directories::BaseDirs;
use serde::Deserialize;
use std::{fmt::Write, fs, path::Path, path::PathBuf, str::FromStr};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::parse_ranges::ErrorPolicy;
use crate::travel_log::DEFAULT_WINDOW_DAYS;

/// Default rendering of dates in the report table, e.g. `05 Nov 2023`.
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

/// When to style terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorMode {
    /// Style only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Name of the home jurisdiction, appended to the day-count headers (e.g. "UK").
    pub home: Option<String>,
    /// Length of the trailing window in days. Default is 365.
    pub window_days: i64,
    /// `chrono` format used to print dates in the report.
    pub date_format: String,
    /// Stop at the first bad line, or report all of them.
    pub error_policy: ErrorPolicy,
    pub color: ColorMode,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    home: Option<String>,
    window_days: Option<i64>,
    date_format: Option<String>,
    error_policy: Option<String>,
    color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: None,
            window_days: DEFAULT_WINDOW_DAYS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            error_policy: ErrorPolicy::default(),
            color: ColorMode::default(),
        }
    }
}

impl Config {
    /// Load config from the first existing config file (XDG path, then native),
    /// falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::config_file_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s)
            .and_then(Self::from_file_config)
            .with_context(|| format!("parsing {}", path.display()))
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("daysout")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("daysout").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Apply defaults and validate the raw file values.
    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let window_days = file_config.window_days.unwrap_or(defaults.window_days);
        if window_days <= 0 {
            bail!("window_days must be a positive number of days, got {window_days}");
        }

        let error_policy = match file_config.error_policy.as_deref() {
            Some(s) => parse_choice::<ErrorPolicy>("error_policy", s)?,
            None => defaults.error_policy,
        };

        let color = match file_config.color.as_deref() {
            Some(s) => parse_choice::<ColorMode>("color", s)?,
            None => defaults.color,
        };

        // chrono only reports fields a date cannot fill (e.g. `%H`) when formatting
        let date_format = file_config.date_format.unwrap_or(defaults.date_format);
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::default().format(&date_format)).is_err() {
            bail!("date_format '{date_format}' is not a valid chrono format string for dates");
        }

        let home = file_config
            .home
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        Ok(Self {
            home,
            window_days,
            date_format,
            error_policy,
            color,
        })
    }
}

/// Parses a kebab-case config value, listing the accepted values on failure.
fn parse_choice<E>(key: &str, value: &str) -> Result<E>
where
    E: FromStr + IntoEnumIterator + AsRef<str>,
{
    E::from_str(value).map_err(|_| {
        let expected: Vec<String> = E::iter().map(|e| format!("'{}'", e.as_ref())).collect();
        anyhow::anyhow!(
            "unknown {key} '{value}', expected one of {}",
            expected.join(", ")
        )
    })
}
