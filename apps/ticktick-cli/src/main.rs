//! TickTick export CLI - writes Todoist-importable CSV files

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use ticktick_cli::{export_all, print_projects, Cli, Commands};
use ticktick_core::{ExportConfig, TickTickClient};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = ExportConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }

    let username = match cli.username {
        Some(username) => username,
        None => prompt_username().context("failed to read username")?,
    };
    let password =
        rpassword::prompt_password("TickTick password: ").context("failed to read password")?;

    let client =
        TickTickClient::login(&config, &username, &password).context("sign-on failed")?;

    match cli.command {
        Commands::Export => {
            std::fs::create_dir_all(&config.output_dir).with_context(|| {
                format!(
                    "failed to create output directory {}",
                    config.output_dir.display()
                )
            })?;

            let summary = export_all(&client, &config)?;
            tracing::info!(
                exported = summary.exported,
                skipped_empty = summary.skipped_empty,
                failed = summary.failed,
                "export finished"
            );

            if summary.failed > 0 && summary.exported == 0 && summary.skipped_empty == 0 {
                anyhow::bail!("every project failed to export");
            }
        }
        Commands::Projects => {
            print_projects(&client.projects()?, &mut std::io::stdout())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn prompt_username() -> std::io::Result<String> {
    print!("TickTick username: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
