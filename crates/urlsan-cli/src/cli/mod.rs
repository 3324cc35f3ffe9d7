//! CLI for the urlsan URL-list sanitizer.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use urlsan_core::config;

use commands::{run_completions, run_lists, run_pull, run_push, run_sanitize, run_show};

/// Top-level CLI for the urlsan URL-list sanitizer.
#[derive(Debug, Parser)]
#[command(name = "urlsan")]
#[command(about = "urlsan: sanitize and publish Netskope URL lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Flags shared by every subcommand that talks to the tenant.
#[derive(Debug, Args)]
pub struct RemoteArgs {
    /// Tenant FQDN (e.g. tenant.goskope.com); overrides the config file.
    #[arg(long)]
    pub tenant: Option<String>,

    /// Read the bearer token from this file instead of $URLSAN_TOKEN.
    #[arg(long, value_name = "PATH")]
    pub token_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Sanitize a URL list file against the Netskope rules.
    Sanitize {
        /// Input text file containing URLs, one per line.
        input: PathBuf,

        /// Output file (defaults to <input>_sanitized.txt next to the input).
        output: Option<PathBuf>,

        /// Skip the run summary.
        #[arg(long)]
        no_summary: bool,
    },

    /// List the URL lists defined on the tenant.
    Lists {
        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Show one URL list, including its entries.
    Show {
        /// List identifier.
        id: u64,

        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Download a URL list's raw entries to a file.
    Pull {
        /// List identifier.
        id: u64,

        /// Destination file, one entry per line.
        output: PathBuf,

        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Sanitize a file and replace a remote URL list with the result.
    Push {
        /// List identifier.
        id: u64,

        /// Input text file containing URLs, one per line.
        input: PathBuf,

        /// New list name (defaults to the list's current name).
        #[arg(long)]
        name: Option<String>,

        /// Activate pending URL-list changes after the upload.
        #[arg(long)]
        deploy: bool,

        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Sanitize {
                input,
                output,
                no_summary,
            } => run_sanitize(&input, output.as_deref(), no_summary)?,
            CliCommand::Lists { remote } => run_lists(&cfg, &remote)?,
            CliCommand::Show { id, remote } => run_show(&cfg, &remote, id)?,
            CliCommand::Pull { id, output, remote } => run_pull(&cfg, &remote, id, &output)?,
            CliCommand::Push {
                id,
                input,
                name,
                deploy,
                remote,
            } => run_push(&cfg, &remote, id, &input, name, deploy)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
