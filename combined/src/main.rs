//! Combined binary - serves the customer API and drives it from the terminal.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use console::{ConsoleConfig, CustomerController, HttpCustomerApi, Outcome, RecordId};
use customer_service_lib::{CustomerServiceConfig, MigrateAction};

#[derive(Parser)]
#[command(name = "customer-manager")]
#[command(about = "Customer records: REST API, storage and console client")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect the database and serve the REST API
    Serve {
        #[arg(long, default_value = "0.0.0.0", env = "GATEWAY_HOST")]
        host: String,
        #[arg(long, default_value = "3000", env = "GATEWAY_PORT")]
        port: u16,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Insert sample customers into an empty database
    Seed,
    /// Talk to a running API
    Client {
        /// Base URL of the customers API
        #[arg(long, env = "CUSTOMER_API_URL")]
        api_url: Option<String>,

        #[command(subcommand)]
        action: ClientCommands,
    },
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

#[derive(Subcommand)]
enum ClientCommands {
    /// Show every customer
    List {
        /// Print the full HTML page instead of a table
        #[arg(long)]
        html: bool,
    },
    /// Create a customer
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Change a customer; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[command(flatten)]
        contact: ContactArgs,
    },
    /// Delete a customer
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
}

/// Ask on stdin; anything but `y`/`yes` declines.
fn prompt(message: &str) -> bool {
    print!("{} [y/N] ", message);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

async fn run_client(
    api_url: Option<String>,
    action: ClientCommands,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = ConsoleConfig::from_env();
    if let Some(url) = api_url {
        config = config.with_api_url(url);
    }
    let api = HttpCustomerApi::new(&config)?;

    let mut html = false;
    let skip_prompt = matches!(action, ClientCommands::Delete { yes: true, .. });
    let confirm = move |message: &str| skip_prompt || prompt(message);
    let mut controller = CustomerController::new(api, confirm);

    let outcome = match action {
        ClientCommands::List { html: as_html } => {
            html = as_html;
            controller.load_customers().await
        }
        ClientCommands::Add {
            name,
            email,
            contact,
        } => {
            let form = controller.form_mut();
            form.name = name;
            form.email = email;
            form.phone = contact.phone.unwrap_or_default();
            form.address = contact.address.unwrap_or_default();
            controller.submit().await
        }
        ClientCommands::Edit {
            id,
            name,
            email,
            contact,
        } => match controller.edit(RecordId::from(id)).await {
            Outcome::Completed => {
                let form = controller.form_mut();
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(email) = email {
                    form.email = email;
                }
                if let Some(phone) = contact.phone {
                    form.phone = phone;
                }
                if let Some(address) = contact.address {
                    form.address = address;
                }
                controller.submit().await
            }
            other => other,
        },
        ClientCommands::Delete { id, .. } => controller.delete(RecordId::from(id)).await,
    };

    let page = controller.page();
    if html {
        print!("{}", console::render::page(page));
    } else {
        if let Some(message) = &page.validation {
            eprintln!("{}", message);
        }
        print!("{}", console::render::text(page));
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    common::telemetry::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            info!("Starting customer manager on http://{}:{}", host, port);
            gateway_lib::run_embedded(&host, port, CustomerServiceConfig::from_env()).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            customer_service_lib::run_migrations(&CustomerServiceConfig::from_env(), migrate_action)
                .await?;
        }
        Commands::Seed => {
            let inserted = customer_service_lib::run_seed(&CustomerServiceConfig::from_env()).await?;
            println!("Inserted {} sample customers", inserted);
        }
        Commands::Client { api_url, action } => return run_client(api_url, action).await,
    }

    Ok(ExitCode::SUCCESS)
}
