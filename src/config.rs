//! Runner configuration from environment variables and command-line flags.
//!
//! Environment values that fail to parse fall back to defaults. Command-line
//! flags override the environment and are strict: a bad flag is a startup error.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::term::{DEFAULT_CELL_H, DEFAULT_CELL_W};

pub const USAGE: &str =
    "usage: world-of-magic [--log <path>] [--cell-w <px>] [--cell-h <px>] [--no-mouse]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Session journal destination; `None` disables the journal
    pub log_path: Option<PathBuf>,
    /// World pixels per terminal column
    pub cell_w: i32,
    /// World pixels per terminal row
    pub cell_h: i32,
    /// Capture mouse clicks for the replay button
    pub mouse: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            cell_w: DEFAULT_CELL_W,
            cell_h: DEFAULT_CELL_H,
            mouse: true,
        }
    }
}

impl GameConfig {
    /// Environment first, then `std::env::args`.
    pub fn load() -> Result<Self> {
        Self::from_env().apply_args(env::args().skip(1))
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup("WOM_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let cell = |key: &str, default: i32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<i32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(default)
        };

        let no_mouse = lookup("WOM_NO_MOUSE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            log_path,
            cell_w: cell("WOM_CELL_W", defaults.cell_w),
            cell_h: cell("WOM_CELL_H", defaults.cell_h),
            mouse: !no_mouse,
        }
    }

    /// Apply command-line flags on top of this config.
    pub fn apply_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log" => {
                    let path = args.next().ok_or_else(|| anyhow!("--log needs a path\n{USAGE}"))?;
                    self.log_path = Some(PathBuf::from(path));
                }
                "--cell-w" => self.cell_w = parse_cell(&arg, args.next())?,
                "--cell-h" => self.cell_h = parse_cell(&arg, args.next())?,
                "--no-mouse" => self.mouse = false,
                other => bail!("unknown argument `{other}`\n{USAGE}"),
            }
        }
        Ok(self)
    }
}

fn parse_cell(flag: &str, value: Option<String>) -> Result<i32> {
    let value = value.ok_or_else(|| anyhow!("{flag} needs a value\n{USAGE}"))?;
    let px: i32 = value
        .trim()
        .parse()
        .with_context(|| format!("{flag}: `{value}` is not a number"))?;
    if px <= 0 {
        bail!("{flag} must be positive, got {px}");
    }
    Ok(px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn test_env_values() {
        let config = GameConfig::from_lookup(lookup(&[
            ("WOM_LOG_PATH", " /tmp/wom.jsonl "),
            ("WOM_CELL_W", "4"),
            ("WOM_CELL_H", "nope"),
            ("WOM_NO_MOUSE", "true"),
        ]));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/wom.jsonl")));
        assert_eq!(config.cell_w, 4);
        assert_eq!(config.cell_h, DEFAULT_CELL_H);
        assert!(!config.mouse);
    }

    #[test]
    fn test_blank_log_path_disables_journal() {
        let config = GameConfig::from_lookup(lookup(&[("WOM_LOG_PATH", "  ")]));
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_args_override_env() {
        let config = GameConfig::from_lookup(lookup(&[("WOM_CELL_W", "4")]))
            .apply_args(args(&["--cell-w", "10", "--log", "run.jsonl", "--no-mouse"]))
            .unwrap();
        assert_eq!(config.cell_w, 10);
        assert_eq!(config.log_path, Some(PathBuf::from("run.jsonl")));
        assert!(!config.mouse);
    }

    #[test]
    fn test_bad_args_are_errors() {
        let base = GameConfig::default;
        assert!(base().apply_args(args(&["--bogus"])).is_err());
        assert!(base().apply_args(args(&["--log"])).is_err());
        assert!(base().apply_args(args(&["--cell-h", "x"])).is_err());
        assert!(base().apply_args(args(&["--cell-h", "0"])).is_err());
    }
}
