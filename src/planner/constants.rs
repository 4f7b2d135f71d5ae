/// Upper bound (exclusive) of the random base score.
pub const RANDOM_SCORE_MAX: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Score bonuses (cumulative)
// ─────────────────────────────────────────────────────────────────────────────

/// Cold-leaning day and the dish is served cold.
pub const COLD_PREFERENCE_BONUS: f64 = 5.0;

/// No cold lean and the dish is served hot.
pub const HOT_DEFAULT_BONUS: f64 = 3.0;

/// Light food preferred and the dish is tagged 清淡.
pub const LIGHT_BONUS: f64 = 4.0;

/// Soup preferred and the dish is tagged 汤 or 滋补.
pub const SOUP_BONUS: f64 = 3.0;

/// Cold weather and a hot dish.
pub const WARMING_BONUS: f64 = 4.0;

/// Hot weather and a cold dish.
pub const COOLING_BONUS: f64 = 4.0;

/// Season not leaning light and the dish is tagged 滋补.
pub const NOURISHING_BONUS: f64 = 3.0;

/// Subtracted for spicy dishes when elderly diners are present.
pub const ELDERLY_SPICE_PENALTY: f64 = 3.0;

/// Spice level from which the elderly penalty applies.
pub const ELDERLY_SPICE_THRESHOLD: u8 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Selection counts
// ─────────────────────────────────────────────────────────────────────────────

/// Cold plates swapped into the sides on cold-leaning days.
pub const MAX_COLD_PICKS: usize = 2;

/// Cooling desserts added on cold-leaning days.
pub const BONUS_DESSERT_COUNT: usize = 1;

pub const STAPLE_COUNT: usize = 1;
