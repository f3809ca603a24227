use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cyrkana_cli::commands::{check_ops, config_ops, convert_ops, profile_ops};
use cyrkana_cli::AssetDir;

#[derive(Parser)]
#[command(name = "cyrtool", about = "Cyrillic to kana asset diagnostics")]
struct Cli {
    /// Asset directory (profiles, kana table, schemas)
    #[arg(long, global = true, default_value = "demos/assets")]
    assets: PathBuf,
    /// Custom settings TOML, applied before anything else
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Log engine events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered profiles (* marks the default)
    Profiles {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay keystrokes through a profile, feeding back the buffer
    Convert {
        /// Profile id
        profile: String,
        /// Keystrokes, one glyph per argument
        #[arg(required = true)]
        keys: Vec<String>,
        /// Output one JSON object per keystroke
        #[arg(long)]
        json: bool,
    },
    /// Check schemas against layouts and the kana table
    Check {
        /// Profile id (default: all profiles)
        profile: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Default settings export and validation
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Export default settings as TOML
    Export,
    /// Validate a custom settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(path) = &cli.settings {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        });
        if let Err(e) = cyrkana_core::settings::init_custom(content) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let assets = AssetDir::new(cli.assets.clone());
    match cli.command {
        Command::Profiles { json } => profile_ops::profiles_cmd(&assets, json),
        Command::Convert {
            profile,
            keys,
            json,
        } => convert_ops::convert_cmd(&assets, &profile, &keys, json),
        Command::Check { profile, json } => {
            check_ops::check_cmd(&assets, profile.as_deref(), json)
        }
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
