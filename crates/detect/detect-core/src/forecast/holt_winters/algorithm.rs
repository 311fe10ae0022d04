//! One-step-ahead Holt-Winters update.
//!
//! Implements the triple exponential smoothing recurrences described in
//! https://otexts.org/fpp2/holt-winters.html.

use detect_api::{HoltWintersConfig, SeasonalityType};

use super::components::HoltWintersOnlineComponents;

/// Fold an observed value into the components and store the forecast for the
/// next tick.
pub fn observe_value_and_update_forecast(
    observed: f64,
    config: &HoltWintersConfig,
    components: &mut HoltWintersOnlineComponents,
) {
    let alpha = config.alpha;
    let beta = config.beta;
    let gamma = config.gamma;

    // Component values from the previous observation. The seasonal index
    // refers to the season we are observing now.
    let last_level = components.level();
    let last_base = components.base();
    let seasonal_index = components.current_seasonal_index();
    let last_season = components.seasonal(seasonal_index);

    let (new_level, new_base, new_season) = if config.is_multiplicative() {
        let new_level = alpha * (observed / last_season) + (1.0 - alpha) * (last_level + last_base);
        let new_base = beta * (new_level - last_level) + (1.0 - beta) * last_base;
        let new_season =
            gamma * (observed / (last_level + last_base)) + (1.0 - gamma) * last_season;
        (new_level, new_base, new_season)
    } else {
        let new_level = alpha * (observed - last_season) + (1.0 - alpha) * (last_level + last_base);
        let new_base = beta * (new_level - last_level) + (1.0 - beta) * last_base;
        let new_season =
            gamma * (observed - (last_level - last_base)) + (1.0 - gamma) * last_season;
        (new_level, new_base, new_season)
    };
    let new_forecast = point_forecast(config.seasonality_type, new_level, new_base, new_season);

    components.add_value();
    components.set_level(new_level);
    components.set_base(new_base);
    components.set_seasonal(seasonal_index, new_season);
    components.set_forecast(new_forecast);
}

/// Combine components into a one-step-ahead point forecast.
pub fn point_forecast(
    seasonality_type: SeasonalityType,
    level: f64,
    base: f64,
    seasonal: f64,
) -> f64 {
    match seasonality_type {
        SeasonalityType::Multiplicative => (level + base) * seasonal,
        SeasonalityType::Additive => level + base + seasonal,
    }
}
