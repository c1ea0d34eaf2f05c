use anyhow::Result;
use clap::{Parser, Subcommand};
use kochchef::cli::{CategoryCommand, DishCommand, MenuCommand, WeekCommand};

/// kochchef - Restaurant menu and weekly plan
#[derive(Parser)]
#[command(name = "kochchef")]
#[command(about = "Manage a restaurant menu and its weekly lunch plan", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Browse, export, import or reset the menu
    Menu {
        #[command(subcommand)]
        command: MenuCommand,
    },
    /// Manage menu categories
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    /// Manage dishes
    Dish {
        #[command(subcommand)]
        command: DishCommand,
    },
    /// Browse and edit the weekly plan
    Week {
        #[command(subcommand)]
        command: WeekCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = kochchef::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    kochchef::observability::init_observability(
        "kochchef",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => kochchef::cli::serve(config, host, port).await,
        Commands::Menu { command } => kochchef::cli::run_menu(&config, command),
        Commands::Category { command } => kochchef::cli::run_category(&config, command),
        Commands::Dish { command } => kochchef::cli::run_dish(&config, command),
        Commands::Week { command } => kochchef::cli::run_week(&config, command),
    }
}
