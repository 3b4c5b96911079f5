use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use rchess::Color;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Side played by the computer, if any.
    pub computer: Option<Color>,
    pub level: u8,
    pub unicode: bool,
    pub clock: ClockConfig,
}

/// Durations in humantime form (`3m`, `5s`, `1m 30s`).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub initial: String,
    pub increment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer: None,
            level: 1,
            unicode: true,
            clock: ClockConfig::default(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial: "3m".into(),
            increment: "0s".into(),
        }
    }
}

/// Parsed clock settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeControl {
    pub initial: Duration,
    pub increment: Duration,
}

impl ClockConfig {
    pub fn time_control(&self) -> Result<TimeControl> {
        let initial = humantime::parse_duration(&self.initial)
            .with_context(|| format!("bad initial time `{}`", self.initial))?;
        let increment = humantime::parse_duration(&self.increment)
            .with_context(|| format!("bad increment `{}`", self.increment))?;
        Ok(TimeControl { initial, increment })
    }

    /// Parse the command-line form `initial[+increment]`, e.g. `2m+5s`.
    pub fn from_spec(spec: &str) -> Self {
        match spec.split_once('+') {
            Some((initial, increment)) => Self {
                initial: initial.trim().into(),
                increment: increment.trim().into(),
            },
            None => Self {
                initial: spec.trim().into(),
                increment: "0s".into(),
            },
        }
    }
}

impl Config {
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(p) = path {
            if p.exists() {
                let content = fs::read_to_string(p)
                    .with_context(|| format!("failed to read config {}", p.display()))?;
                cfg = Self::parse(&content)
                    .with_context(|| format!("failed to parse config {}", p.display()))?;
            }
        }
        if !(1..=2).contains(&cfg.level) {
            anyhow::bail!("level must be 1 or 2, got {}", cfg.level);
        }
        cfg.clock.time_control()?;
        Ok(cfg)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg = Config::parse("computer: black\n").unwrap();
        assert_eq!(cfg.computer, Some(Color::Black));
        assert_eq!(cfg.level, 1);
        assert!(cfg.unicode);
        assert_eq!(
            cfg.clock.time_control().unwrap(),
            TimeControl {
                initial: Duration::from_secs(180),
                increment: Duration::ZERO,
            }
        );
    }

    #[test]
    fn full_file() {
        let yaml = "computer: white\nlevel: 2\nunicode: false\nclock:\n  initial: 2m\n  increment: 5s\n";
        let cfg = Config::parse(yaml).unwrap();
        assert_eq!(cfg.computer, Some(Color::White));
        assert_eq!(cfg.level, 2);
        assert!(!cfg.unicode);
        assert_eq!(cfg.clock.time_control().unwrap().increment, Duration::from_secs(5));
    }

    #[test]
    fn clock_spec_from_command_line() {
        let tc = ClockConfig::from_spec("2m+5s").time_control().unwrap();
        assert_eq!(tc.initial, Duration::from_secs(120));
        assert_eq!(tc.increment, Duration::from_secs(5));
        assert!(ClockConfig::from_spec("soon").time_control().is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let path = PathBuf::from("/definitely/not/here.yaml");
        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.computer, None);
    }
}
