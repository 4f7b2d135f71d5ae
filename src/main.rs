use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};

use menu_planner_rs::ai::{AiMenuService, AiStrategy, FuzzyNameResolver};
use menu_planner_rs::cli::{AiArgs, Cli, Command, LocationArgs, PlanArgs};
use menu_planner_rs::config::{AiConfig, WeatherConfig};
use menu_planner_rs::error::{MenuError, Result};
use menu_planner_rs::interface::{
    display_daily_menu, display_diners, display_dish_list, display_recognition, display_season,
    display_weather, prompt_party_configuration, prompt_yes_no,
};
use menu_planner_rs::logging;
use menu_planner_rs::models::PartyConfiguration;
use menu_planner_rs::planner::{DeterministicStrategy, MenuRecommendationStrategy};
use menu_planner_rs::season::SolarTerm;
use menu_planner_rs::state::{Catalog, load_diners, load_dishes, save_dishes, seed_dishes};
use menu_planner_rs::weather::{
    Coordinates, WeatherCondition, WeatherProvider, fallback_weather_on,
};

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.catalog, args).await,
        Command::Season { date } => {
            display_season(SolarTerm::from_date(date.unwrap_or_else(today)));
            Ok(())
        }
        Command::Weather { location } => {
            let weather = resolve_weather(&location, today()).await?;
            display_weather(&weather);
            Ok(())
        }
        Command::Recognize { image, add, ai } => cmd_recognize(&cli.catalog, &image, add, &ai).await,
        Command::Seed { force } => cmd_seed(&cli.catalog, force),
        Command::Diners { file } => {
            let diners = load_diners(&file)?;
            display_diners(&diners);
            Ok(())
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn coordinates(location: &LocationArgs) -> Option<Coordinates> {
    match (location.lat, location.lon) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
    }
}

async fn resolve_weather(location: &LocationArgs, date: NaiveDate) -> Result<WeatherCondition> {
    match coordinates(location) {
        Some(coordinates) => {
            let provider = WeatherProvider::new(WeatherConfig::from_env())?;
            Ok(provider.current_weather(Some(coordinates)).await)
        }
        None => {
            info!("No location given, using seasonal weather for {date}");
            Ok(fallback_weather_on(date))
        }
    }
}

fn ai_config(args: &AiArgs) -> Result<AiConfig> {
    let mut config = AiConfig::from_env();
    if let Some(key) = &args.api_key {
        config.api_key = key.clone();
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if config.api_key.trim().is_empty() {
        return Err(MenuError::InvalidInput(
            "An API key is required (--api-key or MENU_AI_API_KEY)".to_string(),
        ));
    }
    Ok(config)
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        eprintln!("Dish catalog not found: {}", path.display());
        eprintln!("Run 'menu-planner seed' to create the default catalog.");
        return Err(MenuError::EmptyCatalog);
    }

    let catalog = Catalog::new(load_dishes(path)?);
    if catalog.is_empty() {
        warn!("Catalog {} has no dishes", path.display());
    }
    Ok(catalog)
}

/// Generate and display a daily menu.
async fn cmd_plan(catalog_path: &Path, args: PlanArgs) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    println!("Loaded {} dishes", catalog.len());

    let config = if args.interactive {
        prompt_party_configuration()?
    } else {
        PartyConfiguration::new(args.men, args.women, args.children, args.elderly)
    };
    if !config.is_valid() {
        return Err(MenuError::InvalidInput(
            "At least one diner is required".to_string(),
        ));
    }

    let date = args.date.unwrap_or_else(today);
    let solar_term = SolarTerm::from_date(date);
    let weather = resolve_weather(&args.location, date).await?;

    let strategy: Box<dyn MenuRecommendationStrategy> = if args.ai {
        let mut service = AiMenuService::from_config(&ai_config(&args.ai_args)?)?;
        if args.fuzzy_names {
            service = service.with_resolver(Box::new(FuzzyNameResolver::default()));
        }
        Box::new(AiStrategy::new(service))
    } else {
        Box::new(DeterministicStrategy { seed: args.seed })
    };
    info!(strategy = strategy.name(), "Planning for {} diner(s)", config.total_people);

    loop {
        let mut menu = strategy
            .recommend(&config, catalog.dishes(), solar_term, Some(&weather))
            .await?;
        menu.date = date;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&menu)?);
        } else {
            display_daily_menu(&menu);
        }

        if !args.interactive || !prompt_yes_no("Generate another menu?", false)? {
            break;
        }
    }

    Ok(())
}

/// Identify a dish from a photo, optionally adding it to the catalog.
async fn cmd_recognize(catalog_path: &Path, image: &Path, add: bool, args: &AiArgs) -> Result<()> {
    let bytes = fs::read(image)?;
    let service = AiMenuService::from_config(&ai_config(args)?)?;

    println!("Recognizing {}...", image.display());
    let recognition = service.recognize_dish(&bytes).await?;
    display_recognition(&recognition);

    if add {
        let mut dishes = if catalog_path.exists() {
            load_dishes(catalog_path)?
        } else {
            Vec::new()
        };
        dishes.push(recognition.into_dish());
        save_dishes(catalog_path, &dishes)?;
        println!("Added to {} ({} dishes).", catalog_path.display(), dishes.len());
    }

    Ok(())
}

/// Write the default catalog.
fn cmd_seed(catalog_path: &Path, force: bool) -> Result<()> {
    if catalog_path.exists() && !force {
        println!(
            "Catalog already exists: {} (use --force to overwrite)",
            catalog_path.display()
        );
        return Ok(());
    }

    let dishes = seed_dishes();
    save_dishes(catalog_path, &dishes)?;
    display_dish_list(&dishes, "Default catalog");
    println!("Catalog written to {}.", catalog_path.display());
    Ok(())
}
