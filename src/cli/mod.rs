//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod region_list;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use crate::cli::region_list::list_regions;
use crate::cli::settings::{set_value, unset_value, FileStore, ValueStore};
use crate::core::config::data::path_display;
use crate::core::config::orchestrator::ConfigOrchestrator;
use crate::core::config::sources::{process_env, resolve_settings, ResolvedSettings};
use crate::core::config::ChatSettings;
use crate::core::keyring::SecretStore;
use crate::core::session::StartChatParams;
use crate::utils::logging::init_tracing;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", rustc ",
    env!("VERGEN_RUSTC_SEMVER"),
    ")"
);

#[derive(Parser)]
#[command(name = "connect-chat-config")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Inspect, validate and edit contact-center chat configuration")]
#[command(
    long_about = "connect-chat-config manages the values a chat client needs to start a \
contact-center chat: the start-chat endpoint, instance ID, contact flow ID and region, \
plus the agent and customer display names.\n\n\
Values are resolved from, highest precedence first:\n\
  environment variables, the system keyring, the config file, built-in defaults\n\n\
Environment Variables:\n\
  CONNECT_CHAT_START_ENDPOINT    HTTPS URL of the start-chat endpoint\n\
  CONNECT_CHAT_INSTANCE_ID       Contact-center instance ID\n\
  CONNECT_CHAT_CONTACT_FLOW_ID   Contact flow ID\n\
  CONNECT_CHAT_REGION            Region code, e.g. us-east-1\n\
  CONNECT_CHAT_AGENT_NAME        Agent display name (default: Agent)\n\
  CONNECT_CHAT_CUSTOMER_NAME     Customer display name (default: Customer)\n\
  RUST_LOG                       Diagnostic log filter (overrides -v)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not read from or write to the system keyring
    #[arg(long, global = true)]
    pub no_keyring: bool,

    /// Increase diagnostic output (repeatable)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show resolved values and where they came from (default)
    Show {
        /// Print the validated configuration as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration and exit non-zero on failure
    Check,
    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set (multiple words are joined with spaces; use `--` before values starting with '-')
        value: Vec<String>,
        /// Store the value in the system keyring instead of the config file
        #[arg(long)]
        keyring: bool,
    },
    /// Unset a configuration value
    Unset {
        /// Configuration key to unset
        key: String,
        /// Remove the value from the system keyring instead of the config file
        #[arg(long)]
        keyring: bool,
    },
    /// List supported region codes
    Regions,
    /// Print the config file path
    Path,
    /// Print the start-chat request body for the resolved configuration
    Payload,
}

/// Everything a command needs, built once from the global arguments.
pub struct CliContext {
    orchestrator: ConfigOrchestrator,
    secrets: SecretStore,
}

impl CliContext {
    pub fn new(config_path: PathBuf, use_keyring: bool) -> Self {
        Self {
            orchestrator: ConfigOrchestrator::new(config_path),
            secrets: SecretStore::new_with_keyring(use_keyring),
        }
    }

    pub fn from_args(args: &Args) -> Result<Self, Box<dyn Error>> {
        let path = match &args.config {
            Some(path) => path.clone(),
            None => ChatSettings::default_config_path()?,
        };
        Ok(Self::new(path, !args.no_keyring))
    }

    pub fn resolve(&self) -> Result<ResolvedSettings, Box<dyn Error>> {
        let file = self.orchestrator.load_with_cache()?;
        Ok(resolve_settings(&file, &self.secrets, process_env)?)
    }

    fn store(&self, keyring: bool) -> Box<dyn ValueStore + '_> {
        if keyring {
            Box::new(self.secrets)
        } else {
            Box::new(FileStore::new(&self.orchestrator))
        }
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let context = CliContext::from_args(&args)?;
    debug!(path = %context.orchestrator.path().display(), "using config file");

    let command = args.command.unwrap_or(Commands::Show { json: false });
    run_command(&context, command)
}

fn run_command(context: &CliContext, command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Show { json } => {
            let resolved = context.resolve()?;
            if json {
                match resolved.build() {
                    Ok(config) => println!("{}", serde_json::to_string_pretty(&config)?),
                    Err(err) => fail(&err),
                }
            } else {
                resolved.print_all();
                if let Err(err) = resolved.build() {
                    eprintln!("\n⚠️  {err}");
                }
            }
            Ok(())
        }
        Commands::Check => {
            let resolved = context.resolve()?;
            match resolved.build() {
                Ok(config) => {
                    println!(
                        "✅ Configuration is valid (instance {}, region {})",
                        config.instance_id(),
                        config.region()
                    );
                    if !config.region().supports_connect_chat() {
                        eprintln!(
                            "⚠️  Chat is not known to be offered in {}; check the region code",
                            config.region()
                        );
                    }
                    Ok(())
                }
                Err(err) => fail(&err),
            }
        }
        Commands::Set {
            key,
            value,
            keyring,
        } => {
            match set_value(context.store(keyring).as_ref(), &key, &value) {
                Ok(message) => println!("{message}"),
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
            Ok(())
        }
        Commands::Unset { key, keyring } => {
            match unset_value(context.store(keyring).as_ref(), &key) {
                Ok(message) => println!("{message}"),
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
            Ok(())
        }
        Commands::Regions => {
            let resolved = context.resolve()?;
            let current = resolved
                .settings
                .region
                .as_deref()
                .and_then(|code| code.parse().ok());
            list_regions(current);
            Ok(())
        }
        Commands::Path => {
            println!("{}", path_display(context.orchestrator.path()));
            Ok(())
        }
        Commands::Payload => {
            let resolved = context.resolve()?;
            match resolved.build() {
                Ok(config) => {
                    let params = StartChatParams::new(&config);
                    debug!(endpoint = params.endpoint(), region = %params.region(), "start-chat target");
                    println!("{}", params.to_json()?);
                    Ok(())
                }
                Err(err) => fail(&err),
            }
        }
    }
}

fn fail(err: &dyn Error) -> ! {
    eprintln!("❌ {err}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests;
