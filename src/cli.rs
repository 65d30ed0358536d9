// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the demo screen runs. Subcommands manage configuration:
// - config --show: Display effective configuration
// - config --path: Print the config file location
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

/// Tyrannus - panels, tabs and scrollable regions in the terminal
#[derive(Debug, Parser)]
#[command(name = "tyrannus")]
#[command(version = VERSION)]
#[command(about = "Retained-mode panel UI demo for the terminal", long_about = None)]
pub struct Cli {
    /// Override the configured frame rate
    #[arg(long, global = true)]
    pub fps: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show(cli.fps)?;
            } else if reset {
                let stdin = std::io::stdin();
                handle_config_reset(&mut stdin.lock())?;
            } else {
                println!("Usage: tyrannus config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path (no home directory)")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show(fps: Option<u32>) -> Result<()> {
    let config = Config::load()?.with_fps(fps);

    println!("# Effective configuration (cli > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

/// Whether an answer to a y/N prompt confirms
fn confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

fn handle_config_reset(input: &mut impl BufRead) -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush prompt")?;

        let mut answer = String::new();
        input
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;

        if !confirmed(&answer) {
            println!("Aborted.");
            return Ok(());
        }
    }

    write_default_config(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

/// Write `Config::default().to_toml()` to `path`, creating parent directories
pub fn write_default_config(path: &std::path::Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        bail!("Config path {} has no parent directory", path.display());
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Error creating directory {}", parent.display()))?;
    std::fs::write(path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_subcommand_runs_demo() {
        let cli = Cli::parse_from(["tyrannus"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.fps, None);
    }

    #[test]
    fn test_parse_fps_override() {
        let cli = Cli::parse_from(["tyrannus", "--fps", "60"]);
        assert_eq!(cli.fps, Some(60));
    }

    #[test]
    fn test_parse_config_flags() {
        let cli = Cli::parse_from(["tyrannus", "config", "--show"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                show: true,
                reset: false,
                path: false
            })
        ));
    }

    #[test]
    fn test_confirmation_answers() {
        assert!(confirmed("y\n"));
        assert!(confirmed(" Y "));
        assert!(!confirmed("\n"));
        assert!(!confirmed("yes please"));
    }

    #[test]
    fn test_write_default_config_creates_parents() {
        let dir = std::env::temp_dir().join(format!("tyrannus-cli-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        write_default_config(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, Config::default().to_toml());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
