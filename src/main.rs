//! mybusiness - Tri-state display values
//!
//! CLI entry point: resolves each flag argument to its display label.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use mybusiness::cli::{render_json, render_plain, render_tally};
use mybusiness::config::{Config, OutputFormat, DEFAULT_CONFIG_FILE};
use mybusiness::log::{tally, JsonlLogger, Resolution};
use mybusiness::TriState;

/// Resolve tri-state flags to display values
///
/// Each FLAG is `true`/`yes`/`1`, `false`/`no`/`0`, or `null`/`none`/`-`
/// for an absent value. Absent resolves to `maybe`, true to `yes`,
/// false to `no`. With no FLAG, a single absent value is resolved.
#[derive(Parser, Debug)]
#[command(name = "mybusiness", version, about)]
struct Cli {
    /// Flags to resolve, in order
    flags: Vec<String>,

    /// Path to the mybusiness.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable coloured output (overrides the config file)
    #[arg(long)]
    no_color: bool,

    /// Append resolutions to <DIR>/log.jsonl (enables logging)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print a per-label tally of the log history to stderr
    #[arg(long)]
    summary: bool,
}

/// Effective output and logging settings after CLI overrides
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    color: bool,
    log_dir: Option<PathBuf>,
}

/// Merge config file values with command-line overrides.
fn resolve_settings(cli: &Cli, config: &Config) -> Settings {
    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| config.log.enabled.then(|| config.log.dir.clone()));

    Settings {
        format: cli.format.unwrap_or(config.output.format),
        color: config.output.color && !cli.no_color,
        log_dir,
    }
}

/// Load the explicit config path, or the default file if present.
fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    path.map_or_else(
        || Config::load_or_default(DEFAULT_CONFIG_FILE),
        |p| {
            Config::from_path(p)
                .with_context(|| format!("Failed to load config from '{}'", p.display()))
        },
    )
}

/// Parse every flag argument up front; no arguments means one absent flag.
fn parse_flags(args: &[String]) -> Result<Vec<TriState>> {
    if args.is_empty() {
        return Ok(vec![TriState::Absent]);
    }

    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.parse::<TriState>()
                .with_context(|| format!("Argument {} could not be parsed", i + 1))
        })
        .collect()
}

/// Render one resolution in the selected format.
fn render(resolution: &Resolution, settings: &Settings) -> Result<String> {
    match settings.format {
        OutputFormat::Plain => Ok(render_plain(resolution, settings.color)),
        OutputFormat::Json => render_json(resolution),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let settings = resolve_settings(&cli, &config);

    if cli.summary && settings.log_dir.is_none() {
        bail!("--summary requires logging: pass --log-dir or set [log] enabled = true");
    }

    let flags = parse_flags(&cli.flags)?;
    let resolutions: Vec<Resolution> = flags.into_iter().map(Resolution::new).collect();
    let lines = resolutions
        .iter()
        .map(|r| render(r, &settings))
        .collect::<Result<Vec<_>>>()?;

    let logger = settings
        .log_dir
        .as_ref()
        .map(JsonlLogger::new)
        .transpose()
        .context("Failed to initialize JSONL logger")?;

    if let Some(ref logger) = logger {
        for resolution in &resolutions {
            logger
                .append(resolution)
                .context("Failed to write to JSONL log")?;
        }
    }

    for line in &lines {
        println!("{line}");
    }

    if cli.summary {
        if let Some(ref logger) = logger {
            let history = logger
                .read_all()
                .context("Failed to read log for summary")?;
            eprintln!("{}", render_tally(&tally(&history)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("mybusiness").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_flags_empty_is_absent() {
        assert_eq!(parse_flags(&[]).unwrap(), vec![TriState::Absent]);
    }

    #[test]
    fn test_parse_flags_keeps_order() {
        let args = vec!["yes".to_string(), "null".to_string(), "0".to_string()];
        assert_eq!(
            parse_flags(&args).unwrap(),
            vec![TriState::True, TriState::Absent, TriState::False]
        );
    }

    #[test]
    fn test_parse_flags_reports_bad_argument() {
        let args = vec!["true".to_string(), "sometimes".to_string()];
        let err = parse_flags(&args).unwrap_err();

        assert!(err.to_string().contains("Argument 2"));
        assert!(format!("{err:#}").contains("sometimes"));
    }

    #[test]
    fn test_cli_accepts_dash_as_flag() {
        let cli = cli(&["-", "true"]);
        assert_eq!(cli.flags, vec!["-", "true"]);
    }

    #[test]
    fn test_settings_default_from_config() {
        let settings = resolve_settings(&cli(&[]), &Config::default());

        assert_eq!(settings.format, OutputFormat::Plain);
        assert!(settings.color);
        assert!(settings.log_dir.is_none());
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = Config::parse("[output]\nformat = \"plain\"\ncolor = true\n").unwrap();
        let settings = resolve_settings(
            &cli(&["--format", "json", "--no-color", "--log-dir", "out"]),
            &config,
        );

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.color);
        assert_eq!(settings.log_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_settings_log_dir_from_config_when_enabled() {
        let config = Config::parse("[log]\nenabled = true\ndir = \"hist\"\n").unwrap();
        let settings = resolve_settings(&cli(&[]), &config);
        assert_eq!(settings.log_dir, Some(PathBuf::from("hist")));
    }

    #[test]
    fn test_settings_config_color_off_stays_off() {
        let config = Config::parse("[output]\ncolor = false\n").unwrap();
        let settings = resolve_settings(&cli(&[]), &config);
        assert!(!settings.color);
    }

    #[test]
    fn test_render_plain_and_json() {
        let resolution = Resolution::new(TriState::True);
        let plain = Settings {
            format: OutputFormat::Plain,
            color: false,
            log_dir: None,
        };
        assert_eq!(render(&resolution, &plain).unwrap(), "true -> yes");

        let json = Settings {
            format: OutputFormat::Json,
            ..plain
        };
        assert!(render(&resolution, &json)
            .unwrap()
            .contains("\"output\":\"yes\""));
    }

    #[test]
    fn test_load_config_explicit_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_load_config_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }
}
