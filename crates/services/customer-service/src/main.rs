//! Customer Service - schema and sample-data commands.

use clap::{Parser, Subcommand};

use customer_service_lib::{CustomerServiceConfig, MigrateAction};

#[derive(Parser)]
#[command(name = "customer-service")]
#[command(about = "Customer storage management")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Insert sample customers into an empty database
    Seed,
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    common::telemetry::init_tracing(cli.verbose);

    let config = CustomerServiceConfig::from_env();

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            customer_service_lib::run_migrations(&config, migrate_action).await?;
        }
        Commands::Seed => {
            let inserted = customer_service_lib::run_seed(&config).await?;
            println!("Inserted {} sample customers", inserted);
        }
    }

    Ok(())
}
