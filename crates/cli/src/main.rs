use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process,
};

use adyen_sdk::{AdyenClient, Configuration};
use clap::{Parser, Subcommand};
use tracing::debug;

mod modification;
mod output;
mod payment;
mod recurring;

use output::OutputFormat;

const DEFAULT_CONFIG_PATH: &str = "./adyen.toml";

pub struct Context {
    pub client: AdyenClient,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Adyen - Payment API command line client", long_about = None)]
struct Opts {
    /// Path to the adyen.toml configuration file (default: ./adyen.toml)
    #[arg(long = "config", short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    config_path: PathBuf,

    /// Adyen environment, overrides the configuration file (e.g. "test", "live")
    #[arg(long = "environment", short = 'e', global = true, env = "ADYEN_ENVIRONMENT")]
    environment: Option<String>,

    /// Web service user name
    #[arg(long = "username", global = true, env = "ADYEN_USERNAME")]
    username: Option<String>,

    /// Web service user password
    #[arg(long = "password", global = true, env = "ADYEN_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Merchant account used when a command does not name one
    #[arg(long = "merchant-account", global = true, env = "ADYEN_MERCHANT_ACCOUNT")]
    merchant_account: Option<String>,

    /// Currency used when a command does not name one
    #[arg(long = "currency", global = true, env = "ADYEN_CURRENCY")]
    currency: Option<String>,

    /// Output format: json or pretty (default: pretty)
    #[arg(long = "format", short = 'f', global = true, default_value = "pretty")]
    format: OutputFormat,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, PartialEq, Clone, Debug)]
enum Command {
    /// Charge an encrypted card
    Authorise(payment::AuthoriseCommand),
    /// Verify an encrypted card without charging it
    Verify(payment::VerifyCommand),
    /// Store an encrypted card for recurring charges
    CreateRecurringContract(recurring::CreateContractCommand),
    /// Charge a shopper's stored payment method
    AuthoriseRecurringPayment(recurring::ChargeCommand),
    /// List a shopper's stored payment methods
    ListRecurringDetails(recurring::ListDetailsCommand),
    /// Capture an authorised payment
    Capture(modification::CaptureCommand),
    /// Cancel an authorised payment
    Cancel(modification::CancelCommand),
    /// Refund a captured payment
    Refund(modification::RefundCommand),
    /// Cancel or refund a payment in an unknown state
    CancelOrRefund(modification::CancelOrRefundCommand),
    /// Print the configured client-side encryption public key
    CsePublicKey,
}

fn main() {
    let opts = match parse_opts(env::args_os().collect()) {
        Ok(opts) => opts,
        Err(e) => {
            let _ = e.print();
            process::exit(e.exit_code());
        }
    };

    init_tracing();

    let config = apply_overrides(load_configuration(&opts.config_path), &opts);
    if opts.command == Command::CsePublicKey {
        match config.cse_public_key {
            Some(key) => println!("{}", key),
            None => {
                eprintln!("Error: cse_public_key is not configured");
                process::exit(1);
            }
        }
        return;
    }

    let client = match AdyenClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let ctx = Context { client };

    match handle_command(opts.command, &ctx) {
        Ok(response) => output::print_response(&response, &opts.format),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the .env next to the configuration file, then parse the command line
///
/// The .env values have to be in the environment before clap resolves the
/// `ADYEN_*` fallbacks.
fn parse_opts(args: Vec<OsString>) -> Result<Opts, clap::Error> {
    let config_path = config_path_from_args(&args);
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    load_env_file(config_dir);
    Opts::try_parse_from(args)
}

/// Find the `-c/--config` value ahead of clap
fn config_path_from_args(args: &[OsString]) -> PathBuf {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let Some(text) = arg.to_str() else {
            continue;
        };
        if text == "--" {
            break;
        }
        if text == "-c" || text == "--config" {
            if let Some(value) = iter.next() {
                return PathBuf::from(value);
            }
        } else if let Some(value) = text.strip_prefix("--config=") {
            return PathBuf::from(value);
        } else if let Some(value) = text.strip_prefix("-c") {
            if !value.is_empty() {
                return PathBuf::from(value.strip_prefix('=').unwrap_or(value));
            }
        }
    }
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

/// Load environment variables from .env file in the configuration directory
///
/// Variables already set in the process are kept.
fn load_env_file(config_dir: &Path) {
    let env_file_path = config_dir.join(".env");

    match dotenvy::from_path(&env_file_path) {
        Ok(_) => {
            debug!(path = %env_file_path.display(), "Loaded environment file");
        }
        Err(e) if e.not_found() => {
            // .env file not found is fine, just continue silently
        }
        Err(e) => {
            eprintln!(
                "Warning: Failed to load .env file at {}: {}",
                env_file_path.display(),
                e
            );
        }
    }
}

/// Load the configuration file, falling back to defaults when it is missing or invalid
fn load_configuration(path: &Path) -> Configuration {
    if !path.exists() {
        debug!(path = %path.display(), "No configuration file, using defaults");
        return Configuration::default();
    }

    match Configuration::load(path) {
        Ok(config) => {
            debug!(path = %path.display(), "Loaded configuration");
            config
        }
        Err(e) => {
            eprintln!("Warning: {}", e);
            eprintln!("Using default configuration...");
            Configuration::default()
        }
    }
}

/// Command line and environment values win over the configuration file
fn apply_overrides(mut config: Configuration, opts: &Opts) -> Configuration {
    if let Some(ref environment) = opts.environment {
        config.environment = environment.clone();
    }
    if let Some(ref username) = opts.username {
        config.username = Some(username.clone());
    }
    if let Some(ref password) = opts.password {
        config.password = Some(password.clone());
    }
    if let Some(ref merchant_account) = opts.merchant_account {
        config.default_merchant_account = Some(merchant_account.clone());
    }
    if let Some(ref currency) = opts.currency {
        config.default_currency = Some(currency.clone());
    }
    config
}

fn handle_command(command: Command, ctx: &Context) -> Result<adyen_sdk::Response, String> {
    match command {
        Command::Authorise(cmd) => cmd.execute(ctx),
        Command::Verify(cmd) => cmd.execute(ctx),
        Command::CreateRecurringContract(cmd) => cmd.execute(ctx),
        Command::AuthoriseRecurringPayment(cmd) => cmd.execute(ctx),
        Command::ListRecurringDetails(cmd) => cmd.execute(ctx),
        Command::Capture(cmd) => cmd.execute(ctx),
        Command::Cancel(cmd) => cmd.execute(ctx),
        Command::Refund(cmd) => cmd.execute(ctx),
        Command::CancelOrRefund(cmd) => cmd.execute(ctx),
        Command::CsePublicKey => Err("cse-public-key is handled before connecting".to_string()),
    }
}

/// Reference used when a command is not given one
pub fn generate_reference() -> String {
    uuid::Uuid::new_v4().to_string()
}
