//! CLI for the seokit SEO maintenance tools.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seokit_core::config::{self, SeokitConfig};
use seokit_core::suggest::SuggestOptions;
use std::path::PathBuf;
use std::time::Duration;

use commands::{run_redirect_map, run_suggest, run_validate};

/// Top-level CLI for seokit.
#[derive(Debug, Parser)]
#[command(name = "seokit")]
#[command(about = "seokit: SEO maintenance tools for crawl exports and deployed URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a spreadsheet of SEO title and description recommendations.
    Suggest {
        /// Path to the crawl tool's pages export (CSV).
        input: PathBuf,

        /// Where to write the suggestion CSV (default: seo_fixes_suggestions.csv).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Maximum length for the suggested title (default: 60 characters).
        #[arg(long, value_name = "N")]
        title_limit: Option<usize>,

        /// Maximum length for the suggested meta description (default: 155 characters).
        #[arg(long, value_name = "N")]
        description_limit: Option<usize>,

        /// Suffix appended to suggested titles before clamping.
        #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
        brand_suffix: Option<String>,
    },

    /// Check post-deployment status codes and canonical links/headers.
    Validate {
        /// File containing one URL per line (default: urls_to_check.txt).
        input: Option<PathBuf>,

        /// Where to write the CSV report (default: post_deploy_status.csv).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Request timeout in seconds (default: 10).
        #[arg(long, value_name = "SECS", value_parser = parse_timeout_secs)]
        timeout: Option<f64>,
    },

    /// Build a redirect map skeleton for 4xx URLs in a crawl export.
    RedirectMap {
        /// Path to the crawl tool's mega export (CSV).
        input: PathBuf,

        /// Where to write the redirect worksheet (default: redirect_map.csv).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Accepts a finite, positive number of seconds.
fn parse_timeout_secs(raw: &str) -> Result<f64, String> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("timeout must be a positive number of seconds, got {raw}"))
    }
}

fn timeout_duration(secs: f64) -> Result<Duration> {
    if secs <= 0.0 {
        anyhow::bail!("timeout must be positive, got {secs}");
    }
    Duration::try_from_secs_f64(secs).with_context(|| format!("invalid timeout {secs}"))
}

/// Falls back to built-in defaults when the config file is unusable.
fn config_or_default(loaded: Result<SeokitConfig>) -> SeokitConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("config unavailable, using defaults: {:#}", err);
        SeokitConfig::default()
    })
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config_or_default(config::load_or_init());
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Suggest {
                input,
                output,
                title_limit,
                description_limit,
                brand_suffix,
            } => {
                let defaults = cfg.suggest;
                let opts = SuggestOptions {
                    brand_suffix: brand_suffix.unwrap_or(defaults.brand_suffix),
                    title_limit: title_limit.unwrap_or(defaults.title_limit),
                    description_limit: description_limit.unwrap_or(defaults.description_limit),
                };
                let output = output.unwrap_or(defaults.output);
                run_suggest(&input, &output, &opts)?;
            }
            CliCommand::Validate {
                input,
                output,
                timeout,
            } => {
                let defaults = cfg.validate;
                let input = input.unwrap_or(defaults.input);
                let output = output.unwrap_or(defaults.output);
                let timeout = timeout_duration(timeout.unwrap_or(defaults.timeout_secs))?;
                run_validate(&input, &output, timeout)?;
            }
            CliCommand::RedirectMap { input, output } => {
                let output = output.unwrap_or(cfg.redirect_map.output);
                run_redirect_map(&input, &output)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
