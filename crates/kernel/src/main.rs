//! Orderlee command-line front end.
//!
//! Inspects the route vocabulary and talks to the backend API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use orderlee_kernel::Config;
use orderlee_kernel::cli::{self, Output};

#[derive(Debug, Parser)]
#[command(name = "orderlee", version, about = "Orderlee routes and API client")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every route as a tree
    Routes,
    /// List primary navigation routes
    Nav,
    /// Show the breadcrumb trail for a route
    Breadcrumbs { id: String },
    /// Find the route declaring a path
    Resolve { path: String },
    /// List a route's direct children
    Children { id: String },
    /// List dashboard quick actions
    QuickActions,
    /// Validate the route registry
    Check,
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        /// Falls back to the ORDERLEE_PASSWORD environment variable
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the session token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// GET an API endpoint and print the JSON response
    Get { endpoint: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let output = if args.json { Output::Json } else { Output::Text };

    match args.command {
        Command::Routes => cli::cmd_routes(&config.route_registry()?, output),
        Command::Nav => cli::cmd_nav(&config.route_registry()?, output),
        Command::Breadcrumbs { id } => {
            cli::cmd_breadcrumbs(&config.route_registry()?, &id, output)
        }
        Command::Resolve { path } => cli::cmd_resolve(&config.route_registry()?, &path, output),
        Command::Children { id } => cli::cmd_children(&config.route_registry()?, &id, output),
        Command::QuickActions => cli::cmd_quick_actions(&config.route_registry()?, output),
        Command::Check => cli::cmd_check(&config),
        Command::Login { email, password } => {
            let password = cli::resolve_password(password, |key| std::env::var(key).ok())?;
            cli::cmd_login(&config, &email, &password).await
        }
        Command::Logout => cli::cmd_logout(&config),
        Command::Whoami => cli::cmd_whoami(&config).await,
        Command::Get { endpoint } => cli::cmd_get(&config, &endpoint).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,orderlee_kernel=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
