//! CLI administration tool for planet-api.
//!
//! Manages the planet catalogue and the database directly, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List planets, optionally filtered
//! cargo run --bin admin -- planet list --terrain desert
//!
//! # Show a planet by id or name
//! cargo run --bin admin -- planet show Tatooine
//!
//! # Add a planet (prompts for missing fields)
//! cargo run --bin admin -- planet add --name Hoth --climate frozen --terrain tundra
//!
//! # Remove a planet
//! cargo run --bin admin -- planet remove 4
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! cargo run --bin admin -- db seed
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `planet_api::config`.

use planet_api::application::services::PlanetService;
use planet_api::config;
use planet_api::domain::entities::{NewPlanet, Planet};
use planet_api::domain::repositories::PlanetRepository;
use planet_api::error::AppError;
use planet_api::infrastructure::persistence::PgPlanetRepository;
use planet_api::server::{MIGRATOR, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// Sample catalogue loaded by `db seed`.
const SEED_PLANETS: [(&str, &str, &str); 3] = [
    ("Tatooine", "arid", "desert"),
    ("Alderaan", "temperate", "grasslands"),
    ("Yavin IV", "temperate", "jungle"),
];

/// CLI tool for managing planet-api.
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
    /// Manage planets
    Planet {
        #[command(subcommand)]
        action: PlanetAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Planet management subcommands.
#[derive(Subcommand)]
enum PlanetAction {
    /// List planets
    List {
        /// Exact terrain to match
        #[arg(short, long)]
        terrain: Option<String>,

        /// Exact climate to match
        #[arg(short, long)]
        climate: Option<String>,
    },

    /// Show a planet by id or name
    Show {
        /// Numeric id or exact name
        id_or_name: String,
    },

    /// Add a planet
    Add {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        climate: Option<String>,

        #[arg(short, long)]
        terrain: Option<String>,
    },

    /// Remove a planet
    Remove {
        /// Planet id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,

    /// Insert the sample planets, skipping names that already exist
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Planet { action } => handle_planet_action(action, planet_service(&pool)).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn planet_service(pool: &PgPool) -> PlanetService {
    let repository: Arc<dyn PlanetRepository> =
        Arc::new(PgPlanetRepository::new(Arc::new(pool.clone())));
    PlanetService::new(repository)
}

/// Dispatches planet management commands.
async fn handle_planet_action(action: PlanetAction, service: PlanetService) -> Result<()> {
    match action {
        PlanetAction::List { terrain, climate } => list_planets(&service, terrain, climate).await,
        PlanetAction::Show { id_or_name } => show_planet(&service, &id_or_name).await,
        PlanetAction::Add {
            name,
            climate,
            terrain,
        } => add_planet(&service, name, climate, terrain).await,
        PlanetAction::Remove { id, yes } => remove_planet(&service, id, yes).await,
    }
}

/// Lists planets as a table.
///
/// # Output Format
///
/// ```text
/// 🪐 Planets
///
///   ID    Name                 Climate              Terrain
///   ──────────────────────────────────────────────────────────────────
///   1     Tatooine             arid                 desert
/// ```
async fn list_planets(
    service: &PlanetService,
    terrain: Option<String>,
    climate: Option<String>,
) -> Result<()> {
    println!("{}", "🪐 Planets".bright_blue().bold());
    println!();

    let planets = service
        .list(terrain, climate)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list planets: {}", e))?;

    if planets.is_empty() {
        println!("{}", "  No planets found".yellow());
        println!();
        println!(
            "  Load samples with: {} admin db seed",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<20} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Climate".bright_white().bold(),
        "Terrain".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for planet in &planets {
        println!(
            "  {:<5} {:<20} {:<20} {}",
            planet.id.to_string().bright_black(),
            planet.name.cyan(),
            planet.climate,
            planet.terrain
        );
    }

    println!();
    println!(
        "  Total: {}",
        planets.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows one planet. Numeric input is looked up by id, anything else by name.
async fn show_planet(service: &PlanetService, id_or_name: &str) -> Result<()> {
    let planet = match id_or_name.parse::<i64>() {
        Ok(id) => service.get(id).await,
        Err(_) => service.get_by_name(id_or_name).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("Planet not found")?;

    print_planet(&planet);
    Ok(())
}

fn print_planet(planet: &Planet) {
    println!("  ID:      {}", planet.id.to_string().bright_black());
    println!("  Name:    {}", planet.name.cyan());
    println!("  Climate: {}", planet.climate);
    println!("  Terrain: {}", planet.terrain);
    println!();
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Adds a planet, prompting for any field not given on the command line.
async fn add_planet(
    service: &PlanetService,
    name: Option<String>,
    climate: Option<String>,
    terrain: Option<String>,
) -> Result<()> {
    println!("{}", "➕ Add Planet".bright_blue().bold());
    println!();

    let new_planet = NewPlanet::new(
        prompt_if_missing(name, "Name")?,
        prompt_if_missing(climate, "Climate")?,
        prompt_if_missing(terrain, "Terrain")?,
    );

    match service.create(new_planet).await {
        Ok(planet) => {
            println!("{}", "✅ Planet created".green().bold());
            println!();
            print_planet(&planet);
            Ok(())
        }
        Err(AppError::Conflict { .. }) => {
            anyhow::bail!("A planet with this name already exists")
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create planet: {}", e)),
    }
}

/// Removes a planet after confirmation.
async fn remove_planet(service: &PlanetService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Remove Planet".bright_blue().bold());
    println!();

    let planet = service
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Planet not found")?;

    print_planet(&planet);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this planet?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .remove(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove planet: {}", e))?;

    println!("{}", "✅ Planet removed".green().bold());
    println!();

    Ok(())
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            planet_service(pool)
                .check_store()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            MIGRATOR.run(pool).await.context("Failed to apply migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
        DbAction::Seed => seed(&planet_service(pool)).await?,
    }

    Ok(())
}

/// Inserts the sample planets that are not present yet.
async fn seed(service: &PlanetService) -> Result<()> {
    println!("{}", "🌱 Seeding planets".bright_blue().bold());
    println!();

    let mut inserted = 0;

    for (name, climate, terrain) in SEED_PLANETS {
        let existing = service
            .get_by_name(name)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

        if existing.is_some() {
            println!("  {} {}", "skip".bright_black(), name);
            continue;
        }

        service
            .create(NewPlanet::new(name, climate, terrain))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to insert {}: {}", name, e))?;

        inserted += 1;
        println!("  {} {}", "add ".green(), name.cyan());
    }

    println!();
    println!(
        "  Inserted: {}",
        inserted.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}
