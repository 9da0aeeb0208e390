use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::Password;
use dotenvy::dotenv;
use reelgate_cli::keys::{env_line, generate_key};
use reelgate_config::PasswordConfig;
use reelgate_config::password::{MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use reelgate_core::password::hash_password_blocking;

#[derive(Parser)]
#[command(name = "reelgate-cli")]
#[command(about = "Reelgate CLI - Operator tools for Reelgate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ADMIN_KEY_HASH value for a provisioning key
    HashKey {
        /// Provisioning key (will be prompted securely if not provided)
        #[arg(short = 'k', long)]
        key: Option<String>,
    },
    /// Generate a random provisioning key and its hash
    GenerateKey,
    /// Print a bcrypt hash for a password
    HashPassword {
        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// bcrypt cost; defaults to BCRYPT_COST or 10
        #[arg(short = 'c', long)]
        cost: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::HashKey { key } => handle_hash_key(key),
        Commands::GenerateKey => handle_generate_key(),
        Commands::HashPassword { password, cost } => handle_hash_password(password, cost),
    }
}

fn handle_hash_key(key: Option<String>) -> anyhow::Result<()> {
    let key = match key {
        Some(key) => key,
        None => Password::new()
            .with_prompt("Provisioning key")
            .with_confirmation("Confirm key", "Keys don't match")
            .interact()
            .context("failed to read provisioning key")?,
    };

    println!("{}", env_line(&key));
    Ok(())
}

fn handle_generate_key() -> anyhow::Result<()> {
    let key = generate_key();

    println!("Provisioning key (hand this to whoever registers admins):");
    println!("  {key}");
    println!();
    println!("Server configuration:");
    println!("  {}", env_line(&key));
    Ok(())
}

fn handle_hash_password(password: Option<String>, cost: Option<u32>) -> anyhow::Result<()> {
    let cost = cost.unwrap_or_else(|| PasswordConfig::from_env().bcrypt_cost);
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        bail!("cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}");
    }

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("failed to read password")?,
    };

    let hash = hash_password_blocking(&password, cost)?;
    println!("{hash}");
    Ok(())
}
