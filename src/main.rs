use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use changelog_section::cli::orchestration::{self, ExtractArgs};
use changelog_section::{config, ui, ChangelogError};

#[derive(clap::Parser)]
#[command(
    name = "changelog-section",
    about = "Print the release notes of one version from a markdown changelog"
)]
struct Args {
    #[arg(
        long,
        required_unless_present = "list",
        help = "Version to extract, e.g. v5.0.2 or 5.0.2-rc1"
    )]
    version: Option<String>,

    #[arg(short, long, help = "Changelog file [default: CHANGELOG.md]")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "List versions found in the changelog and exit")]
    list: bool,

    #[arg(long, help = "Print debug diagnostics to stderr")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = config::load_config(args.config.as_deref())?;

    if args.list {
        let versions = orchestration::run_list(args.file.as_deref(), &config)?;
        let versions: Vec<&str> = versions.iter().map(String::as_str).collect();
        ui::display_available_versions(&versions);
        return Ok(());
    }

    let extract_args = ExtractArgs {
        version: args.version.unwrap_or_default(),
        file: args.file,
    };

    match orchestration::run_extract(&extract_args, &config) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                ui::display_warning(warning);
            }
            ui::print_section(&outcome.section)?;
            Ok(())
        }
        Err(ChangelogError::VersionNotFound { version, available }) => {
            let file =
                orchestration::resolve_changelog_path(extract_args.file.as_deref(), &config);
            ui::display_not_found(&version, &file, &available);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
