//! Operator console for the Foodgram backend.
//!
//! Runs against the database directly, so accounts can be provisioned,
//! API tokens minted and revoked, and catalog data bulk-loaded without
//! going through the HTTP API.
//!
//! ```bash
//! cargo run --bin admin -- user create --username chef --email chef@example.com
//! cargo run --bin admin -- token create --user chef --name "Mobile App"
//! cargo run --bin admin -- token list
//! cargo run --bin admin -- token revoke 3
//! cargo run --bin admin -- import ingredients data/ingredients.json
//! cargo run --bin admin -- import tags data/tags.csv
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db stats
//! ```
//!
//! Reads `DATABASE_URL` for the connection and, for `token create`,
//! `AUTH_SIGNING_SECRET`, which must match the server's value so the
//! stored hashes verify. Catalog imports are idempotent and safe to
//! re-run; fields missing from the CLI are prompted for interactively.

use foodgram_backend::constants::{
    MAX_LEN_EMAIL, MAX_LEN_NAME, MAX_LEN_SLUG, MAX_LEN_UNIT, MAX_LEN_USERNAME,
};
use foodgram_backend::domain::entities::{NewUser, User};
use foodgram_backend::domain::repositories::{TokenRepository, UserRepository};
use foodgram_backend::infrastructure::persistence::{PgTokenRepository, PgUserRepository};
use foodgram_backend::utils::token_hash::hash_token;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use regex::Regex;
use serde::Deserialize;
use sqlx::PgPool;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

/// Username charset mirrors the API account records: word characters
/// plus `.@+-`.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").unwrap());

/// Tag slugs are restricted to URL-safe characters.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap());

#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Mint, list and revoke API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Bulk-load catalog data
    Import {
        #[command(subcommand)]
        action: ImportAction,
    },

    /// Database diagnostics
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user account
    Create {
        /// Username, prompted for when omitted
        #[arg(short, long)]
        username: Option<String>,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,

        /// First name
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Answer yes to the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Mint a token for an existing user
    Create {
        /// Owning user, by id or username
        #[arg(short, long)]
        user: String,

        /// Label shown in listings, prompted for when omitted
        #[arg(short, long)]
        name: Option<String>,

        /// Import an externally generated token value instead of minting
        #[arg(short, long)]
        token: Option<String>,

        /// Answer yes to the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List tokens across all users or for one
    List {
        /// Narrow to one user, by id or username
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Revoke a token so the API stops accepting it
    Revoke {
        /// Token id or label
        name_or_id: String,
    },
}

#[derive(Subcommand)]
enum ImportAction {
    /// Load ingredients from a `.json` or `.csv` file
    Ingredients {
        /// Path to the data file
        file: PathBuf,
    },

    /// Load tags from a `.json` or `.csv` file
    Tags {
        /// Path to the data file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Verify the database answers queries
    Check,

    /// Show table counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let pool = connect_pool().await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Import { action } => handle_import_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn connect_pool() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            email,
            first_name,
            last_name,
            yes,
        } => create_user(repo, username, email, first_name, last_name, yes).await,
    }
}

async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let users = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let tokens = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create {
            user,
            name,
            token,
            yes,
        } => create_token(tokens, users, user, name, token, yes).await,
        TokenAction::List { user } => list_tokens(tokens, users, user).await,
        TokenAction::Revoke { name_or_id } => revoke_token(tokens, name_or_id).await,
    }
}

async fn handle_import_action(action: ImportAction, pool: &PgPool) -> Result<()> {
    match action {
        ImportAction::Ingredients { file } => import_ingredients(pool, &file).await,
        ImportAction::Tags { file } => import_tags(pool, &file).await,
    }
}

/// Creates a user account, prompting for any field not given as a flag.
///
/// Applies the same length and charset limits as the HTTP API, so
/// accounts made here behave identically to registered ones.
async fn create_user(
    repo: Arc<PgUserRepository>,
    username: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    if username.is_empty() || username.chars().count() > MAX_LEN_USERNAME {
        bail!(
            "Username must be 1-{} characters, got {}",
            MAX_LEN_USERNAME,
            username.chars().count()
        );
    }
    if !USERNAME_REGEX.is_match(&username) {
        bail!("Username may only contain letters, digits and .@+- characters");
    }

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    if !email.contains('@') || email.chars().count() > MAX_LEN_EMAIL {
        bail!("'{}' is not a valid email address", email);
    }

    let first_name = match first_name {
        Some(f) => f,
        None => Input::new().with_prompt("First name").interact_text()?,
    };

    let last_name = match last_name {
        Some(l) => l,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };

    for (label, value) in [("First name", &first_name), ("Last name", &last_name)] {
        if value.is_empty() || value.chars().count() > MAX_LEN_USERNAME {
            bail!("{} must be 1-{} characters", label, MAX_LEN_USERNAME);
        }
    }

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Email:    {}", email.cyan());
    println!("  Name:     {} {}", first_name.cyan(), last_name.cyan());
    println!();

    if !skip_confirm && !confirm("Create this user?", true)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let user = repo
        .create(NewUser {
            username,
            email,
            first_name,
            last_name,
        })
        .await
        .context("Failed to create user")?;

    println!();
    println!("{}", "✅ User created".green().bold());
    println!("  ID: {}", user.id.to_string().bright_white().bold());
    println!();
    println!(
        "  Mint a token with: {} admin token create --user {}",
        "cargo run --bin".bright_cyan(),
        user.username
    );
    println!();

    Ok(())
}

/// Resolves a user selector that is either a numeric id or a username.
async fn resolve_user(repo: &PgUserRepository, selector: &str) -> Result<User> {
    let found = match selector.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await?,
        Err(_) => repo.find_by_username(selector).await?,
    };

    found.with_context(|| format!("User '{}' not found", selector))
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Mints an API token for a user and prints it exactly once.
///
/// Only the HMAC-SHA256 hash under `AUTH_SIGNING_SECRET` reaches the
/// database; a lost token value cannot be recovered, only replaced.
/// Generated values are 48 alphanumeric characters.
async fn create_token(
    tokens: Arc<PgTokenRepository>,
    users: Arc<PgUserRepository>,
    user_selector: String,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let signing_secret = std::env::var("AUTH_SIGNING_SECRET")
        .context("AUTH_SIGNING_SECRET must be set to mint tokens")?;

    let user = resolve_user(&users, &user_selector).await?;

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Personal API")
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            println!("{}", "✨ Generated new token".green());
            generate_token()
        }
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!(
        "  User:  {} ({}, id {})",
        user.username.cyan(),
        user.full_name(),
        user.id
    );
    println!("  Name:  {}", token_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  Copy the token now; only its hash is stored.".red().bold()
    );
    println!();

    if !skip_confirm && !confirm("Create this token?", true)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let token_hash = hash_token(&signing_secret, &token_value);

    tokens
        .create_token(user.id, &token_name, &token_hash)
        .await
        .context("Failed to create token")?;

    println!();
    println!("{}", "✅ Token created".green().bold());
    println!();
    println!("{}", "Authenticate requests with:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/users/me",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists tokens in a table, resolving owner usernames for readability.
async fn list_tokens(
    tokens: Arc<PgTokenRepository>,
    users: Arc<PgUserRepository>,
    user_selector: Option<String>,
) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let user_id = match user_selector {
        Some(selector) => Some(resolve_user(&users, &selector).await?.id),
        None => None,
    };

    let token_list = tokens
        .list_tokens(user_id)
        .await
        .context("Failed to list tokens")?;

    if token_list.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create --user <username>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    // Deleted owners appear as "#<id>".
    let mut owners: HashMap<i64, String> = HashMap::new();
    for token in &token_list {
        if !owners.contains_key(&token.user_id) {
            let label = match users.find_by_id(token.user_id).await? {
                Some(user) => user.username,
                None => format!("#{}", token.user_id),
            };
            owners.insert(token.user_id, label);
        }
    }

    println!(
        "  {:<3} {:<16} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "User".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(82).bright_black());

    for token in &token_list {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<3} {:<16} {:<30} {:<20} {}",
            token.id.to_string().bright_black(),
            owners[&token.user_id].cyan(),
            token.name.cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        token_list.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token, looked up by numeric id or exact label.
///
/// Revocation asks for confirmation and defaults to no; an already
/// revoked token is reported rather than touched again.
async fn revoke_token(tokens: Arc<PgTokenRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();

    let all_tokens = tokens
        .list_tokens(None)
        .await
        .context("Failed to list tokens")?;

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => all_tokens.into_iter().find(|t| t.id == id),
        Err(_) => all_tokens.into_iter().find(|t| t.name == name_or_id),
    };

    let token = token.context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    if !confirm("Revoke this token?", false)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    tokens
        .revoke_token(token.id)
        .await
        .context("Failed to revoke token")?;

    println!();
    println!("{}", "✅ Token revoked".green().bold());
    println!();

    Ok(())
}

/// One ingredient record from an import file.
#[derive(Debug, Deserialize)]
struct IngredientRecord {
    name: String,
    measurement_unit: String,
}

/// One tag record from an import file.
#[derive(Debug, Deserialize)]
struct TagRecord {
    name: String,
    slug: String,
}

/// Imports ingredients from a JSON or CSV file.
///
/// Inserts are idempotent: records already present (same name and unit)
/// are counted as skipped, never duplicated or overwritten.
async fn import_ingredients(pool: &PgPool, file: &Path) -> Result<()> {
    println!("{}", "📦 Import Ingredients".bright_blue().bold());
    println!();
    println!("  File: {}", file.display().to_string().cyan());

    let records = read_ingredient_records(file)?;
    println!("  Records: {}", records.len().to_string().bright_white());
    println!();

    for (idx, record) in records.iter().enumerate() {
        if record.name.is_empty() || record.name.chars().count() > MAX_LEN_NAME {
            bail!(
                "Record {}: ingredient name must be 1-{} characters",
                idx + 1,
                MAX_LEN_NAME
            );
        }
        if record.measurement_unit.is_empty()
            || record.measurement_unit.chars().count() > MAX_LEN_UNIT
        {
            bail!(
                "Record {}: measurement unit must be 1-{} characters",
                idx + 1,
                MAX_LEN_UNIT
            );
        }
    }

    let mut loaded = 0u64;
    let mut skipped = 0u64;

    for record in &records {
        let result = sqlx::query(
            "INSERT INTO ingredients (name, measurement_unit) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(&record.name)
        .bind(&record.measurement_unit)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert ingredient '{}'", record.name))?;

        if result.rows_affected() == 1 {
            loaded += 1;
        } else {
            skipped += 1;
        }
    }

    print_import_summary(loaded, skipped);

    Ok(())
}

/// Imports tags from a JSON or CSV file.
///
/// Inserts are idempotent: records already present (same name or slug)
/// are counted as skipped, never duplicated or overwritten.
async fn import_tags(pool: &PgPool, file: &Path) -> Result<()> {
    println!("{}", "📦 Import Tags".bright_blue().bold());
    println!();
    println!("  File: {}", file.display().to_string().cyan());

    let records = read_tag_records(file)?;
    println!("  Records: {}", records.len().to_string().bright_white());
    println!();

    for (idx, record) in records.iter().enumerate() {
        if record.name.is_empty() || record.name.chars().count() > MAX_LEN_NAME {
            bail!(
                "Record {}: tag name must be 1-{} characters",
                idx + 1,
                MAX_LEN_NAME
            );
        }
        if record.slug.is_empty() || record.slug.chars().count() > MAX_LEN_SLUG {
            bail!(
                "Record {}: slug must be 1-{} characters",
                idx + 1,
                MAX_LEN_SLUG
            );
        }
        if !SLUG_REGEX.is_match(&record.slug) {
            bail!(
                "Record {}: slug '{}' may only contain letters, digits, hyphens and underscores",
                idx + 1,
                record.slug
            );
        }
    }

    let mut loaded = 0u64;
    let mut skipped = 0u64;

    for record in &records {
        let result =
            sqlx::query("INSERT INTO tags (name, slug) VALUES ($1, $2) ON CONFLICT DO NOTHING")
                .bind(&record.name)
                .bind(&record.slug)
                .execute(pool)
                .await
                .with_context(|| format!("Failed to insert tag '{}'", record.name))?;

        if result.rows_affected() == 1 {
            loaded += 1;
        } else {
            skipped += 1;
        }
    }

    print_import_summary(loaded, skipped);

    Ok(())
}

/// Prints the loaded/skipped totals after an import run.
fn print_import_summary(loaded: u64, skipped: u64) {
    println!("  Loaded:  {}", loaded.to_string().bright_green().bold());
    println!(
        "  Skipped: {} {}",
        skipped.to_string().yellow().bold(),
        "(already present)".bright_black()
    );
    println!();
}

/// Reads ingredient records from a file, dispatching on the extension.
fn read_ingredient_records(file: &Path) -> Result<Vec<IngredientRecord>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    match file_extension(file).as_deref() {
        Some("json") => serde_json::from_str(&content).context("Failed to parse ingredient JSON"),
        Some("csv") => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                // Units never contain commas; names sometimes do.
                let (name, unit) = line
                    .rsplit_once(',')
                    .with_context(|| format!("Line {}: expected 'name,unit'", idx + 1))?;
                Ok(IngredientRecord {
                    name: unquote(name),
                    measurement_unit: unquote(unit),
                })
            })
            .collect(),
        _ => bail!("Unsupported file format; expected .json or .csv"),
    }
}

/// Reads tag records from a file, dispatching on the extension.
fn read_tag_records(file: &Path) -> Result<Vec<TagRecord>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    match file_extension(file).as_deref() {
        Some("json") => serde_json::from_str(&content).context("Failed to parse tag JSON"),
        Some("csv") => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let (name, slug) = line
                    .rsplit_once(',')
                    .with_context(|| format!("Line {}: expected 'name,slug'", idx + 1))?;
                Ok(TagRecord {
                    name: unquote(name),
                    slug: unquote(slug),
                })
            })
            .collect(),
        _ => bail!("Unsupported file format; expected .json or .csv"),
    }
}

/// Lowercased file extension, if any.
fn file_extension(file: &Path) -> Option<String> {
    file.extension().map(|e| e.to_string_lossy().to_lowercase())
}

/// Trims whitespace and surrounding double quotes from a CSV field.
fn unquote(field: &str) -> String {
    field.trim().trim_matches('"').to_string()
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Stats => {
            println!("{}", "📊 Table Counts".bright_blue().bold());
            println!();

            let tables = [
                ("Users", "SELECT COUNT(*) FROM users"),
                ("Recipes", "SELECT COUNT(*) FROM recipes"),
                ("Tags", "SELECT COUNT(*) FROM tags"),
                ("Ingredients", "SELECT COUNT(*) FROM ingredients"),
                ("Favorites", "SELECT COUNT(*) FROM favorites"),
                ("Cart items", "SELECT COUNT(*) FROM shopping_cart_items"),
                ("Subscriptions", "SELECT COUNT(*) FROM subscriptions"),
                (
                    "Active tokens",
                    "SELECT COUNT(*) FROM api_tokens WHERE revoked_at IS NULL",
                ),
            ];

            for (label, query) in tables {
                let count: i64 = sqlx::query_scalar(query).fetch_one(pool).await?;
                println!(
                    "  {:<14} {}",
                    format!("{}:", label),
                    count.to_string().bright_green().bold()
                );
            }

            println!();
        }
    }

    Ok(())
}

/// 48 random alphanumeric characters, roughly 286 bits of entropy.
fn generate_token() -> String {
    use rand::Rng;
    use rand::distr::Alphanumeric;

    rand::rng()
        .sample_iter(Alphanumeric)
        .take(48)
        .map(char::from)
        .collect()
}
