use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use semver200::config::{self, Config};
use semver200::{Version, logging};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "semver200")]
#[command(version, about = "Parse and compare Semantic Versioning 2.0.0 strings")]
struct Cli {
    /// Config file, defaults to $XDG_CONFIG_HOME/semver200/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the components of a version
    Parse {
        version: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print -1, 0 or 1 depending on the precedence of A relative to B
    Compare { a: String, b: String },
    /// Sort versions by precedence, one per line; reads stdin when none are given
    Sort {
        versions: Vec<String>,
        /// Highest version first
        #[arg(long)]
        reverse: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let config = Config::load(&config_path)?;
    let _guard = logging::init(&config.log);

    match cli.command {
        Command::Parse { version, json } => {
            let version = Version::parse(&version)
                .with_context(|| format!("invalid version {version:?}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(version.data())?);
            } else {
                println!("major: {}", version.major());
                println!("minor: {}", version.minor());
                println!("patch: {}", version.patch());
                println!("prerelease: {}", version.prerelease());
                println!("build: {}", version.build());
            }
        }
        Command::Compare { a, b } => {
            let left = Version::parse(&a).with_context(|| format!("invalid version {a:?}"))?;
            let right = Version::parse(&b).with_context(|| format!("invalid version {b:?}"))?;
            println!("{}", left.cmp(&right) as i8);
        }
        Command::Sort { versions, reverse } => {
            let inputs = if versions.is_empty() {
                std::io::stdin()
                    .lock()
                    .lines()
                    .collect::<Result<Vec<_>, _>>()
                    .context("failed to read versions from stdin")?
            } else {
                versions
            };
            for version in sort_versions(&inputs, reverse) {
                println!("{version}");
            }
        }
    }

    Ok(())
}

/// Parse and sort `inputs`, skipping blank lines and invalid versions
///
/// The sort is stable: versions equal in precedence keep their input order.
fn sort_versions(inputs: &[String], reverse: bool) -> Vec<Version> {
    let mut parsed: Vec<Version> = inputs
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| match Version::parse(s) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(version = s, error = %e, "skipping invalid version");
                None
            }
        })
        .collect();

    if reverse {
        parsed.sort_by(|a, b| b.cmp(a));
    } else {
        parsed.sort();
    }
    info!(count = parsed.len(), "sorted versions");
    parsed
}
