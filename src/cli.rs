//! Command-line configuration for the terminal runner.
//!
//! `blockfall [--seed N] [--log-file PATH] [--cell-width N]`

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use env_logger::{Builder, Env, Target};

pub const USAGE: &str = "usage: blockfall [--seed N] [--log-file PATH] [--cell-width N]

  --seed N          piece sequence seed (default: from the clock)
  --log-file PATH   write logs to PATH (filter with RUST_LOG, default info)
  --cell-width N    terminal columns per board cell, 1-4 (default 2)
  --help, -h        show this help

keys: arrows/hjkl/wasd move, up rotates, space drops, p pauses,
      enter starts, r resets, q quits";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u32>,
    pub log_file: Option<PathBuf>,
    pub cell_width: u16,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: None,
            cell_width: 2,
            help: false,
        }
    }
}

impl Config {
    /// The configured seed, or one derived from the wall clock
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Config> {
    let mut config = Config::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--log-file" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log-file"))?;
                config.log_file = Some(PathBuf::from(v));
            }
            "--cell-width" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --cell-width"))?;
                config.cell_width = v
                    .parse::<u16>()
                    .ok()
                    .filter(|w| (1..=4).contains(w))
                    .ok_or_else(|| anyhow!("invalid --cell-width value: {} (expected 1-4)", v))?;
            }
            "--help" | "-h" => {
                config.help = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Install `env_logger` writing to the configured file.
///
/// Without a log file nothing is installed: stderr output would corrupt the
/// alternate screen, so log calls stay no-ops.
pub fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| anyhow!("logger already initialized: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_args_uses_defaults() {
        let cfg = parse_args(&[]).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.cell_width, 2);
    }

    #[test]
    fn parse_args_reads_all_options() {
        let cfg = parse_args(&args(&[
            "--seed",
            "42",
            "--log-file",
            "/tmp/blockfall.log",
            "--cell-width",
            "1",
        ]))
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                seed: Some(42),
                log_file: Some(PathBuf::from("/tmp/blockfall.log")),
                cell_width: 1,
                help: false,
            }
        );
        assert_eq!(cfg.resolve_seed(), 42);
    }

    #[test]
    fn parse_args_rejects_bad_values() {
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "-3"])).is_err());
        assert!(parse_args(&args(&["--cell-width", "0"])).is_err());
        assert!(parse_args(&args(&["--cell-width", "9"])).is_err());
        let err = parse_args(&args(&["--hold"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --hold");
    }

    #[test]
    fn parse_args_help_flag() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }
}
