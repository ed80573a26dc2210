use std::io::{self, Write};
use std::process::ExitCode;

use appver_core::{UpdatePolicy, check_for_update, compare_versions_sign};
use appver_platform::{AppPaths, AppPathsError};
use clap::{Parser, Subcommand};
use log::{debug, error};

mod error;
mod logging;
mod settings;

use error::AppError;
use settings::AppSettings;

#[derive(Parser)]
#[command(version, about = "Compare app versions and decide on updates", long_about = None)]
struct Cli {
    /// Turn debug logging on for this run
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print -1, 0 or 1 depending on whether A is older than, equal to or newer than B
    Compare { a: String, b: String },

    /// Decide whether an update from CURRENT to LATEST should be offered
    Check {
        current: String,
        latest: String,

        /// Treat this release as skipped (repeatable)
        #[arg(long = "skip")]
        skip: Vec<String>,

        /// Installed versions older than this must update
        #[arg(long)]
        minimum: Option<String>,
    },

    /// Remember a release that should not be offered again
    Skip { version: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let paths = AppPaths::new();
    let settings = paths.as_ref().map(AppSettings::load).unwrap_or_default();
    logging::init_logging(
        paths.as_ref().ok(),
        cli.debug || settings.debug_logging,
        settings.max_log_size_bytes,
    );

    match run(cli.command, settings, &paths, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Commands,
    mut settings: AppSettings,
    paths: &Result<AppPaths, AppPathsError>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command {
        Commands::Compare { a, b } => {
            writeln!(out, "{}", compare_versions_sign(&a, &b))?;
        }
        Commands::Check {
            current,
            latest,
            skip,
            minimum,
        } => {
            let policy = merge_policy(settings.update, skip, minimum);
            match check_for_update(&current, &latest, &policy) {
                Some(update) => {
                    let mandatory = if update.mandatory { ", mandatory" } else { "" };
                    writeln!(
                        out,
                        "update available: {} -> {} ({}{mandatory})",
                        update.current_version, update.latest_version, update.kind
                    )?;
                }
                None => writeln!(out, "up to date")?,
            }
        }
        Commands::Skip { version } => {
            let paths = paths
                .as_ref()
                .map_err(|e| AppError::settings("save", *e))?;
            if settings.skip_version(&version) {
                settings
                    .save(paths)
                    .map_err(|e| AppError::settings("save", e))?;
                debug!("Skipped version {version} saved");
                writeln!(out, "skipping {version}")?;
            } else {
                writeln!(out, "{version} is already skipped")?;
            }
        }
    }
    Ok(())
}

fn merge_policy(
    mut policy: UpdatePolicy,
    skip: Vec<String>,
    minimum: Option<String>,
) -> UpdatePolicy {
    policy.skipped_versions.extend(skip);
    if minimum.is_some() {
        policy.minimum_supported_version = minimum;
    }
    policy
}
