//! Command-line access to the MTscan configuration file.
//!
//! Reads the same file as the GUI, prints or edits individual settings,
//! profiles, and address lists, and saves after every change.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use mtscan::{
    MtscanError, Result,
    address::Address,
    config::{AddressList, Profile, SETTINGS},
    config_store::ConfigStore,
    notify::LogNotifier,
    tracing_config,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "mtscan-conf")]
#[command(about = "Inspect and edit the MTscan configuration")]
struct Cli {
    /// Configuration file to use instead of the per-user default
    #[arg(short, long, env = "MTSCAN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the complete configuration
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a single setting, e.g. `preferences.gps_hostname`
    Get { path: String },
    /// Change a single setting
    Set { path: String, value: String },
    /// List every setting path with its type
    Keys,
    /// Edit the blacklist
    Blacklist {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Edit the highlightlist
    Highlightlist {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Edit the connection profiles
    Profiles {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ListAction {
    /// Print the stored addresses
    Show,
    /// Put an address on the list
    Add { address: Address },
    /// Take an address off the list
    Remove { address: Address },
    /// Tell whether an address is on the list
    Check { address: Address },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the profiles in display order
    List,
    /// Append a profile
    Add {
        name: String,
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<i32>,
        #[arg(long)]
        login: Option<String>,
        #[arg(long)]
        interface: Option<String>,
    },
    /// Remove the profile at a position shown by `list`
    Remove { index: usize },
}

fn main() -> ExitCode {
    if let Err(error) = tracing_config::init() {
        eprintln!("Failed to initialize logging: {error}");
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut store = ConfigStore::init(cli.config, LogNotifier);
    debug!(path = %store.path().display(), "Using configuration file");

    match cli.command {
        Commands::Show { json } => show(&store, json),
        Commands::Get { path } => {
            println!("{path}: {}", store.get_by_path(&path)?);
            Ok(())
        }
        Commands::Set { path, value } => {
            let old_value = store.set_by_path(&path, &value)?;
            store.save()?;
            println!("{path}: {old_value} -> {}", store.get_by_path(&path)?);
            Ok(())
        }
        Commands::Keys => {
            for setting in SETTINGS {
                println!("{} ({})", setting.path(), setting.kind.name());
            }
            Ok(())
        }
        Commands::Blacklist { action } => {
            edit_list(&mut store, action, ConfigStore::blacklist_mut)
        }
        Commands::Highlightlist { action } => {
            edit_list(&mut store, action, ConfigStore::highlightlist_mut)
        }
        Commands::Profiles { action } => edit_profiles(&mut store, action),
    }
}

fn show(store: &ConfigStore, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.config())?);
        return Ok(());
    }

    println!("# {}", store.path().display());
    for setting in SETTINGS {
        println!("{} = {}", setting.path(), store.get_by_path(&setting.path())?);
    }
    print_list("blacklist", store.blacklist());
    print_list("highlightlist", store.highlightlist());
    print_profiles(store.profiles());

    Ok(())
}

fn edit_list(
    store: &mut ConfigStore,
    action: ListAction,
    list: fn(&mut ConfigStore) -> &mut AddressList,
) -> Result<()> {
    match action {
        ListAction::Show => {
            for address in list(store).stored() {
                println!("{address}");
            }
            return Ok(());
        }
        ListAction::Check { address } => {
            let verdict = if list(store).contains(address) {
                "listed"
            } else {
                "not listed"
            };
            println!("{address}: {verdict}");
            return Ok(());
        }
        ListAction::Add { address } => list(store).add(address),
        ListAction::Remove { address } => list(store).remove(address),
    }

    store.save()?;
    Ok(())
}

fn edit_profiles(store: &mut ConfigStore, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::List => {
            print_profiles(store.profiles());
            return Ok(());
        }
        ProfileAction::Add {
            name,
            host,
            port,
            login,
            interface,
        } => {
            let defaults = Profile::named(name);
            let profile = Profile {
                host: host.unwrap_or_else(|| defaults.host.clone()),
                port: port.unwrap_or(defaults.port),
                login: login.unwrap_or_else(|| defaults.login.clone()),
                interface: interface.unwrap_or_else(|| defaults.interface.clone()),
                ..defaults
            };
            let index = store.add_profile(profile);
            println!("Added profile {index}");
        }
        ProfileAction::Remove { index } => {
            let removed = store
                .remove_profile(index)
                .ok_or_else(|| MtscanError::Usage(format!("No profile at index {index}")))?;
            println!("Removed profile {index} ({})", removed.name);
        }
    }

    store.save()?;
    Ok(())
}

fn print_list(name: &str, list: &AddressList) {
    println!(
        "{name}: enabled={} inverted={} stored={}",
        list.enabled,
        list.inverted,
        list.len()
    );
}

fn print_profiles(profiles: &[Profile]) {
    for (index, profile) in profiles.iter().enumerate() {
        println!(
            "{index}: {} {}@{}:{} ({})",
            profile.name, profile.login, profile.host, profile.port, profile.interface
        );
    }
}
