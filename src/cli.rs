use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// menu-planner: household daily menus from season, weather, and party makeup.
#[derive(Parser, Debug)]
#[command(name = "menu-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the dish catalog (JSON, or CSV by extension).
    #[arg(short, long, global = true, default_value = "dishes.json")]
    pub catalog: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a daily menu.
    Plan(PlanArgs),

    /// Show the solar term and its dietary suggestion.
    Season {
        /// Date to resolve (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the resolved current weather.
    Weather {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Identify a dish from a JPEG photo.
    Recognize {
        /// Image file to send to the vision model.
        image: PathBuf,

        /// Append the recognized dish to the catalog.
        #[arg(long)]
        add: bool,

        #[command(flatten)]
        ai: AiArgs,
    },

    /// Write the default dish catalog.
    Seed {
        /// Overwrite an existing catalog.
        #[arg(long)]
        force: bool,
    },

    /// List diners and their taste preferences.
    Diners {
        /// Path to the diners JSON file.
        #[arg(short, long, default_value = "diners.json")]
        file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Adult men in the party.
    #[arg(long, default_value_t = 1)]
    pub men: u32,

    /// Adult women in the party.
    #[arg(long, default_value_t = 1)]
    pub women: u32,

    /// Children in the party.
    #[arg(long, default_value_t = 0)]
    pub children: u32,

    /// Elderly diners in the party.
    #[arg(long, default_value_t = 0)]
    pub elderly: u32,

    /// Ask for the party composition and offer to regenerate.
    #[arg(short, long)]
    pub interactive: bool,

    /// Date to plan for (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Seed for a reproducible menu.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ask the language model instead of the scoring engine.
    #[arg(long)]
    pub ai: bool,

    /// Resolve AI dish names approximately.
    #[arg(long, requires = "ai")]
    pub fuzzy_names: bool,

    /// Print the menu as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub location: LocationArgs,

    #[command(flatten)]
    pub ai_args: AiArgs,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            men: 1,
            women: 1,
            children: 0,
            elderly: 0,
            interactive: false,
            date: None,
            seed: None,
            ai: false,
            fuzzy_names: false,
            json: false,
            location: LocationArgs::default(),
            ai_args: AiArgs::default(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Latitude in decimal degrees.
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AiArgs {
    /// API key for the chat-completions provider.
    #[arg(long, env = "MENU_AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the text model.
    #[arg(long)]
    pub model: Option<String>,
}
