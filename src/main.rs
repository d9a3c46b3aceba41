mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Commands};
use folio_core::config::FolioConfig;
use folio_core::profile::Profile;
use folio_core::terminal::OutputKind;
use folio_core::utils::ansi::AnsiRenderer;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = FolioConfig::load(args.config.as_deref()).context("failed to load config")?;
    let profile_path = args.profile.as_deref().or(config.profile_path.as_deref());
    let profile = Arc::new(Profile::load(profile_path).context("failed to load profile")?);

    let mut renderer = if args.no_color {
        AnsiRenderer::with_color(false)
    } else {
        AnsiRenderer::stdout()
    };

    match args.command.unwrap_or(Commands::Shell) {
        Commands::Shell => cli::shell::run(profile, &mut renderer).map(|()| ExitCode::SUCCESS),
        Commands::Chat => cli::chat::run(&config, profile, &mut renderer)
            .await
            .map(|()| ExitCode::SUCCESS),
        Commands::Ask { question } => cli::chat::ask(&config, profile, &question.join(" "))
            .await
            .map(|()| ExitCode::SUCCESS),
        Commands::About => section_status(cli::sections::run(&profile, &mut renderer, "about")),
        Commands::Skills { list } => {
            let line = if list { "skills --list" } else { "skills" };
            section_status(cli::sections::run(&profile, &mut renderer, line))
        }
        Commands::Experience => {
            section_status(cli::sections::run(&profile, &mut renderer, "experience"))
        }
        Commands::Projects { filter } => {
            let line = match filter {
                Some(tag) => format!("projects --filter {tag}"),
                None => "projects".to_string(),
            };
            section_status(cli::sections::run(&profile, &mut renderer, &line))
        }
        Commands::Contact => section_status(cli::sections::run(&profile, &mut renderer, "contact")),
        Commands::Github => section_status(cli::sections::run(&profile, &mut renderer, "github")),
        Commands::Education => {
            section_status(cli::sections::run(&profile, &mut renderer, "education"))
        }
        Commands::Publications => {
            section_status(cli::sections::run(&profile, &mut renderer, "publications"))
        }
        Commands::Awards => section_status(cli::sections::run(&profile, &mut renderer, "awards")),
        Commands::Certifications => {
            section_status(cli::sections::run(&profile, &mut renderer, "certifications"))
        }
    }
}

/// Map section output to the process exit status without skipping
/// destructors or buffered output.
fn section_status(kind: Result<OutputKind>) -> Result<ExitCode> {
    Ok(match kind? {
        OutputKind::Error => ExitCode::FAILURE,
        OutputKind::Info | OutputKind::Success => ExitCode::SUCCESS,
    })
}
