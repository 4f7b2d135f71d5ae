pub mod prompts;
pub mod render;

pub use prompts::{prompt_count, prompt_party_configuration, prompt_yes_no};
pub use render::{
    display_daily_menu, display_diners, display_dish_list, display_recognition, display_season,
    display_weather,
};
