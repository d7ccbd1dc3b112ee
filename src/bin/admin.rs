//! CLI administration tool for shop-backend.
//!
//! Manages the catalog and inspects users and orders directly in PostgreSQL,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Add a catalog item (prompts for missing fields)
//! cargo run --bin admin -- item add --name "Round Widget" --price 2.99
//!
//! # List the catalog
//! cargo run --bin admin -- item list
//!
//! # Show a user and their cart
//! cargo run --bin admin -- user show test
//!
//! # Show a user's orders
//! cargo run --bin admin -- order history test
//!
//! # Row counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use shop_backend::config::{Config, mask_connection_string};
use shop_backend::domain::entities::{Item, NewItem};
use shop_backend::domain::repositories::{ItemRepository, OrderRepository, UserRepository};
use shop_backend::infrastructure::persistence::{
    PgItemRepository, PgOrderRepository, PgUserRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;
use std::sync::Arc;

/// CLI tool for managing shop-backend.
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
    /// Manage the item catalog
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Inspect users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum ItemAction {
    /// Add an item to the catalog
    Add {
        /// Item name, e.g. "Round Widget"
        #[arg(short, long)]
        name: Option<String>,

        /// Unit price, e.g. 2.99
        #[arg(short, long)]
        price: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List the catalog
    List,
}

#[derive(Subcommand)]
enum UserAction {
    /// Show a user and the contents of their cart
    Show { username: String },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List a user's submitted orders
    History { username: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Item { action } => handle_item_action(action, pool).await?,
        Commands::User { action } => handle_user_action(action, pool).await?,
        Commands::Order { action } => handle_order_action(action, pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_item_action(action: ItemAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgItemRepository::new(pool);

    match action {
        ItemAction::Add {
            name,
            price,
            description,
            yes,
        } => add_item(&repo, name, price, description, yes).await,
        ItemAction::List => list_items(&repo).await,
    }
}

/// Adds a catalog item, prompting for anything not given on the command line.
async fn add_item(
    repo: &PgItemRepository,
    name: Option<String>,
    price: Option<String>,
    description: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🛒 Add Catalog Item".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let price = match price {
        Some(p) => p,
        None => Input::new()
            .with_prompt("Price")
            .with_initial_text("0.00")
            .interact_text()?,
    };
    let price = parse_price(&price)?;

    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?,
    };

    println!();
    println!("{}", "Item details:".bright_white().bold());
    println!("  Name:        {}", name.cyan());
    println!("  Price:       {}", price.to_string().bright_yellow());
    println!("  Description: {}", description);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Add this item?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let item = repo
        .create(NewItem {
            name,
            price,
            description,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add item: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ Item added".green().bold(),
        item.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Parses a non-negative price such as `2.99`.
fn parse_price(raw: &str) -> Result<Decimal> {
    let price = Decimal::from_str(raw.trim())
        .with_context(|| format!("Invalid price '{}'", raw))?;

    if price.is_sign_negative() {
        anyhow::bail!("Price must not be negative, got {}", price);
    }

    Ok(price)
}

/// Lists the catalog.
///
/// # Output Format
///
/// ```text
/// 📋 Catalog
///
///   ID  Name                           Price      Description
///   ─────────────────────────────────────────────────────────────────
///   1   Round Widget                   2.99       A widget that is round
/// ```
async fn list_items(repo: &PgItemRepository) -> Result<()> {
    println!("{}", "📋 Catalog".bright_blue().bold());
    println!();

    let items = repo
        .find_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list items: {}", e))?;

    if items.is_empty() {
        println!("{}", "  Catalog is empty".yellow());
        println!();
        println!(
            "  Add an item with: {} admin item add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    print_item_header();
    for item in &items {
        print_item_row(item);
    }

    println!();
    println!("  Total: {}", items.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_item_header() {
    println!(
        "  {:<3} {:<30} {:<10} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold(),
        "Description".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());
}

fn print_item_row(item: &Item) {
    println!(
        "  {:<3} {:<30} {:<10} {}",
        item.id.to_string().bright_black(),
        item.name.cyan(),
        item.price.to_string().bright_yellow(),
        item.description
    );
}

async fn handle_user_action(action: UserAction, pool: Arc<PgPool>) -> Result<()> {
    let UserAction::Show { username } = action;
    let repo = PgUserRepository::new(pool);

    println!("{}", "👤 User".bright_blue().bold());
    println!();

    let user = repo
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  ID:       {}", user.id.to_string().bright_black());
    println!("  Username: {}", user.username.cyan());
    println!("  Cart ID:  {}", user.cart.id.to_string().bright_black());
    println!();

    if user.cart.is_empty() {
        println!("{}", "  Cart is empty".yellow());
    } else {
        print_item_header();
        for item in &user.cart.items {
            print_item_row(item);
        }
        println!();
        println!(
            "  Cart total: {}",
            user.cart.total.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

async fn handle_order_action(action: OrderAction, pool: Arc<PgPool>) -> Result<()> {
    let OrderAction::History { username } = action;
    let users = PgUserRepository::new(pool.clone());
    let orders = PgOrderRepository::new(pool);

    println!(
        "{} {}",
        "📦 Orders for".bright_blue().bold(),
        username.cyan().bold()
    );
    println!();

    let user = users
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    let history = orders
        .find_by_user(user.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load orders: {}", e))?;

    if history.is_empty() {
        println!("{}", "  No orders yet".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<7} {}",
        "ID".bright_white().bold(),
        "Submitted".bright_white().bold(),
        "Items".bright_white().bold(),
        "Total".bright_white().bold()
    );
    println!("  {}", "─".repeat(50).bright_black());

    for order in &history {
        println!(
            "  {:<5} {:<20} {:<7} {}",
            order.id.to_string().bright_black(),
            order
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            order.items.len(),
            order.total.to_string().bright_green()
        );
    }

    println!();
    println!("  Total: {}", history.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays row counts for the main tables.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let items_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let orders_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_orders")
        .fetch_one(pool)
        .await?;

    println!(
        "  Items:  {}",
        items_count.to_string().bright_green().bold()
    );
    println!(
        "  Users:  {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Orders: {}",
        orders_count.to_string().bright_green().bold()
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2.99").unwrap(), Decimal::new(299, 2));
        assert_eq!(parse_price(" 10 ").unwrap(), Decimal::new(10, 0));
        assert!(parse_price("-1.00").is_err());
        assert!(parse_price("abc").is_err());
    }
}
