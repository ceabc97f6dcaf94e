use std::path::PathBuf;

use admin::commands;
use clap::{Parser, Subcommand};
use storage::{Database, dto::standings::StandingsFilter, export::ExportTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sportsday-admin")]
#[command(about = "Sports-day scoreboard administration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert demo houses and events into an empty database
    Seed,
    /// Print the current house standings
    Standings {
        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        age_group: Option<String>,
    },
    /// Export a table as CSV
    Export {
        #[arg(long, value_parser = clap::value_parser!(ExportTable))]
        table: ExportTable,

        /// Defaults to stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Set the admin PIN; an empty PIN removes it
    SetPin { pin: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("sportsday_admin={},admin={},storage={}", log_level, log_level, log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Connecting to database...");
    let db = Database::new(&cli.database_url, 1).await?;
    db.run_migrations().await?;

    match cli.command {
        Commands::Seed => {
            let summary = commands::seed(&db).await?;
            tracing::info!(
                "✓ Seeded {} houses and {} events",
                summary.houses,
                summary.events
            );
        }
        Commands::Standings {
            gender,
            category,
            age_group,
        } => {
            let filter = StandingsFilter {
                gender,
                category,
                age_group,
            }
            .normalized();
            print!("{}", commands::standings(&db, &filter).await?);
        }
        Commands::Export { table, output } => {
            let count = commands::export(&db, table, output.as_deref()).await?;
            tracing::info!("✓ Exported {} rows to {}", count, table.file_name());
        }
        Commands::SetPin { pin } => {
            commands::set_pin(&db, &pin).await?;
        }
    }

    Ok(())
}
