use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use passvault::cli::{
    handle_add, handle_get, handle_key_command, handle_list, handle_store_command, CliContext,
    KeyCommands, StoreCommands,
};
use passvault::config::{Settings, VaultPaths};
use passvault::storage::KeyManager;

#[derive(Parser)]
#[command(
    name = "passvault",
    author = "Kaylee Beyene",
    version,
    about = "Local encrypted per-site password store",
    long_about = "passvault keeps one password per site in a plain text file, \
                  each encrypted with AES-256-GCM under a key file you control."
)]
struct Cli {
    /// Key file to use for this command
    #[arg(long, global = true, value_name = "PATH")]
    key: Option<PathBuf>,

    /// Password file to use for this command
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config directory, settings and a default key
    Init,

    /// Show current configuration and paths
    Config,

    /// Key management commands
    #[command(subcommand)]
    Key(KeyCommands),

    /// Password file commands
    #[command(subcommand)]
    Store(StoreCommands),

    /// Add or replace the password for a site
    Add {
        /// Site name (cannot contain ':')
        site: String,
        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the password for a site
    Get {
        /// Site name
        site: String,
    },

    /// List the sites in the password file
    #[command(alias = "ls")]
    List,
}

fn main() {
    // RUST_LOG=passvault=debug for lifecycle events; passwords are never logged
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passvault=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = VaultPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    let mut ctx = CliContext::new(paths, settings, cli.key, cli.store);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing passvault at: {}", ctx.paths.base_dir().display());
            ctx.paths.ensure_directories()?;
            ctx.settings.save(&ctx.paths)?;

            let key_file = ctx.key_file();
            if key_file.exists() {
                println!("Using existing key: {}", key_file.display());
            } else {
                KeyManager::new().create_key(&key_file)?;
                println!("Key created and saved to {}.", key_file.display());
            }

            println!("Initialization complete!");
            println!();
            println!("Run 'passvault add <site>' to store your first password.");
        }
        Some(Commands::Config) => {
            println!("passvault Configuration");
            println!("=======================");
            println!("Config directory: {}", ctx.paths.base_dir().display());
            println!("Settings file:    {}", ctx.paths.settings_file().display());
            println!("Key file:         {}", ctx.key_file().display());
            println!("Password file:    {}", ctx.store_file().display());
            println!();
            if ctx.paths.is_initialized() {
                println!("Settings saved: yes");
            } else {
                println!("Settings saved: no (run 'passvault init')");
            }
        }
        Some(Commands::Key(cmd)) => handle_key_command(&mut ctx, cmd)?,
        Some(Commands::Store(cmd)) => handle_store_command(&mut ctx, cmd)?,
        Some(Commands::Add { site, password }) => handle_add(&ctx, &site, password)?,
        Some(Commands::Get { site }) => handle_get(&ctx, &site)?,
        Some(Commands::List) => handle_list(&ctx)?,
        None => {
            println!("passvault - Local encrypted per-site password store");
            println!();
            println!("Run 'passvault --help' for usage information.");
            println!("Run 'passvault init' to get started.");
        }
    }

    Ok(())
}
