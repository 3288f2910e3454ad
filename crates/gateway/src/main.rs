//! API Gateway - HTTP REST API for customer records.

use clap::{Parser, Subcommand};

use customer_service_lib::CustomerServiceConfig;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "Customer records REST API")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, default_value = "0.0.0.0", env = "GATEWAY_HOST")]
        host: String,
        #[arg(long, default_value = "3000", env = "GATEWAY_PORT")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    common::telemetry::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            gateway_lib::run_embedded(&host, port, CustomerServiceConfig::from_env()).await?;
        }
    }

    Ok(())
}
