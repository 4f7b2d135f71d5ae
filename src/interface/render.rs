use crate::ai::DishRecognition;
use crate::models::{DailyMenu, Diner, Dish};
use crate::season::SolarTerm;
use crate::weather::WeatherCondition;

fn display_section(title: &str, dishes: &[Dish]) {
    if dishes.is_empty() {
        return;
    }

    println!("--- {} ---", title);
    let max_name_len = dishes
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(4);

    for dish in dishes {
        let padding = max_name_len - dish.name.chars().count();
        println!(
            "  {}{}  ¥{:>5.1}  {}",
            dish.name,
            "  ".repeat(padding),
            dish.price,
            dish.spice_descriptor()
        );
    }
    println!();
}

/// Display a daily menu grouped by role.
pub fn display_daily_menu(menu: &DailyMenu) {
    println!();
    println!("=== 今日菜单 {} ===", menu.date);
    println!();
    println!("节气: {}  {}", menu.solar_term, menu.solar_term_description);
    println!("天气: {}", menu.weather_description);
    println!();

    if menu.is_empty() {
        println!("No dishes matched the party's constraints.");
        println!();
        return;
    }

    display_section("主菜", &menu.main_dishes);
    display_section("配菜", &menu.side_dishes);
    display_section("汤品", &menu.soups);
    display_section("主食", &menu.staples);

    println!("--- Summary ---");
    println!("Total dishes: {}", menu.dish_count());
    println!("Total price: ¥{:.1}", menu.total_price);
    println!();
}

/// Display a simple list of dishes with their details.
pub fn display_dish_list(dishes: &[Dish], title: &str) {
    if dishes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, dishes.len());
    println!();
    for dish in dishes {
        println!("  {}", dish.catalog_line());
    }
    println!();
}

pub fn display_season(term: SolarTerm) {
    let suggestion = term.dietary_suggestion();
    println!("节气: {}", term);
    println!("Estimated temperature: {:.0}°C", term.estimated_temperature());
    println!("饮食建议: {}", suggestion.description);
}

pub fn display_weather(weather: &WeatherCondition) {
    println!("天气: {}", weather.summary());
    println!("Humidity: {:.0}%", weather.humidity * 100.0);
    println!("饮食建议: {}", weather.dietary_preference().description);
}

pub fn display_recognition(recognition: &DishRecognition) {
    println!("菜名: {}", recognition.name);
    println!("Estimated price: ¥{:.1}", recognition.estimated_price);
    println!("Spicy level: {}", recognition.spicy_level);
    println!("热菜: {}", if recognition.is_hot { "是" } else { "否" });
    println!(
        "Suitable for elderly / children: {} / {}",
        recognition.suitable_for_elderly, recognition.suitable_for_children
    );
    println!("标签: {}", recognition.tags.join(", "));
}

pub fn display_diners(diners: &[Diner]) {
    if diners.is_empty() {
        println!("Diners: (none)");
        return;
    }

    println!();
    println!("=== Diners ({}) ===", diners.len());
    for diner in diners {
        println!("  {} {}  {}", diner.emoji, diner.name, diner.taste_description());
        if !diner.notes.is_empty() {
            println!("      {}", diner.notes);
        }
    }
    println!();
}
