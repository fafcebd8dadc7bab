//! CLI administration tool for the portfolio site.
//!
//! Manages dashboard administrators, shows statistics, and performs
//! database checks without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Create an administrator (prompts for missing values)
//! cargo run --bin admin -- user create --email me@example.com
//!
//! # List administrators
//! cargo run --bin admin -- user list
//!
//! # Change a password (signs the user out everywhere)
//! cargo run --bin admin -- user passwd me@example.com
//!
//! # Delete an administrator
//! cargo run --bin admin -- user delete me@example.com
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use portfolio_site::application::services::AuthService;
use portfolio_site::application::services::auth_service::MIN_PASSWORD_LENGTH;
use portfolio_site::infrastructure::persistence::PgAuthRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

type Auth = AuthService<PgAuthRepository>;

/// CLI tool for managing the portfolio site.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage dashboard administrators
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Administrator subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create an administrator
    Create {
        /// Login email
        #[arg(short, long)]
        email: Option<String>,

        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List administrators
    List,

    /// Delete an administrator and their sessions
    Delete {
        /// Login email
        email: String,
    },

    /// Set a new password
    Passwd {
        /// Login email
        email: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Delete expired dashboard sessions
    PurgeSessions,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn auth_service(pool: &PgPool) -> Auth {
    let repository = Arc::new(PgAuthRepository::new(Arc::new(pool.clone())));
    // Session hashing is not used by user management
    let secret = std::env::var("SESSION_SECRET").unwrap_or_default();
    AuthService::new(repository, secret, chrono::Duration::hours(24))
}

/// Dispatches administrator commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let auth = auth_service(pool);

    match action {
        UserAction::Create {
            email,
            generate,
            yes,
        } => create_user(&auth, email, generate, yes).await?,
        UserAction::List => list_users(&auth).await?,
        UserAction::Delete { email } => delete_user(&auth, &email).await?,
        UserAction::Passwd { email } => change_password(&auth, &email).await?,
    }

    Ok(())
}

/// Creates an administrator with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email (or use provided)
/// 2. Prompt for password twice, or generate one with `--generate`
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash with bcrypt and store
///
/// A generated password is shown once and cannot be retrieved later.
async fn create_user(
    auth: &Auth,
    email: Option<String>,
    generate: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Administrator".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = if generate {
        let generated = generate_password();
        println!("{}", "✨ Generated new password".green());
        println!("  Password: {}", generated.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "⚠️  IMPORTANT: Save this password now! You won't be able to see it again."
                .red()
                .bold()
        );
        println!();
        generated
    } else {
        prompt_password()?
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create administrator {}?", email))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = auth
        .create_user(&email, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create administrator: {}", e))?;

    println!();
    println!("{}", "✅ Administrator created!".green().bold());
    println!("  Sign in at {} as {}", "/login".bright_cyan(), user.email.cyan());
    println!();

    Ok(())
}

/// Lists administrators.
///
/// # Output Format
///
/// ```text
/// 📋 Administrators
///
///   ID  Email                                Created
///   ──────────────────────────────────────────────────────────────
///   1   me@example.com                       2024-06-01 10:30
/// ```
async fn list_users(auth: &Auth) -> Result<()> {
    println!("{}", "📋 Administrators".bright_blue().bold());
    println!();

    let users = auth
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list administrators: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No administrators found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<36} {:<20}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<36} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes an administrator after confirmation (default: No).
async fn delete_user(auth: &Auth, email: &str) -> Result<()> {
    println!("{}", "🗑  Delete Administrator".bright_blue().bold());
    println!();

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {} and end their sessions?", email))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    auth.delete_user(email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete administrator: {}", e))?;

    println!("{}", "✅ Administrator deleted".green().bold());
    Ok(())
}

async fn change_password(auth: &Auth, email: &str) -> Result<()> {
    println!("{}", "🔒 Change Password".bright_blue().bold());
    println!("  Account: {}", email.cyan());
    println!();

    let password = prompt_password()?;

    auth.set_password(email, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to change password: {}", e))?;

    println!("{}", "✅ Password changed, all sessions ended".green().bold());
    Ok(())
}

fn prompt_password() -> Result<String> {
    let password = Password::new()
        .with_prompt(format!("Password (min {} characters)", MIN_PASSWORD_LENGTH))
        .with_confirmation("Repeat password", "Passwords do not match")
        .validate_with(|input: &String| -> Result<(), String> {
            if input.chars().count() >= MIN_PASSWORD_LENGTH {
                Ok(())
            } else {
                Err(format!("At least {} characters", MIN_PASSWORD_LENGTH))
            }
        })
        .interact()?;

    Ok(password)
}

/// Displays site statistics: content counts and short link clicks.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let rows: [(&str, &str); 6] = [
        ("Projects", "SELECT COUNT(*) FROM projects"),
        ("Skills", "SELECT COUNT(*) FROM skills"),
        ("Experiences", "SELECT COUNT(*) FROM experiences"),
        ("Social links", "SELECT COUNT(*) FROM social_links"),
        ("Short links", "SELECT COUNT(*) FROM short_links"),
        (
            "Clicks",
            "SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM short_links",
        ),
    ];

    for (label, query) in rows {
        let value: i64 = sqlx::query_scalar(query).fetch_one(pool).await?;
        println!(
            "  {:<14} {}",
            format!("{}:", label),
            value.to_string().bright_green().bold()
        );
    }

    let sessions: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE expires_at > NOW()")
            .fetch_one(pool)
            .await?;
    println!(
        "  {:<14} {}",
        "Sessions:",
        sessions.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
        DbAction::PurgeSessions => {
            let removed = auth_service(pool)
                .purge_expired_sessions()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} {}",
                "✅ Expired sessions removed:".green().bold(),
                removed.to_string().bright_white()
            );
        }
    }

    Ok(())
}

/// Generates a random password.
///
/// # Format
///
/// - Length: 20 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
