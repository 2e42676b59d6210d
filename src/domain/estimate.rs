use rand::Rng;

use crate::domain::weather::Condition;

/// Estimated chance of rain for a condition category, in percent.
/// Deterministic lookup; the forecast source carries no probability field.
#[must_use]
pub fn rain_chance(condition: Condition) -> u8 {
    match condition {
        Condition::Clear => 0,
        Condition::Clouds => 20,
        Condition::Rain => 80,
        Condition::Drizzle => 60,
        Condition::Thunderstorm => 90,
        Condition::Snow => 70,
        Condition::Mist => 30,
        Condition::Fog => 25,
        Condition::Other => 10,
    }
}

/// Estimated UV index, drawn from a condition-specific range.
pub fn uv_index(condition: Condition, rng: &mut impl Rng) -> u8 {
    match condition {
        Condition::Clear => rng.random_range(7..=9),
        Condition::Clouds => rng.random_range(3..=5),
        Condition::Rain | Condition::Drizzle | Condition::Thunderstorm | Condition::Snow => {
            rng.random_range(1..=2)
        }
        Condition::Mist | Condition::Fog => rng.random_range(2..=4),
        Condition::Other => 3,
    }
}

/// Pseudo air-quality index in [50, 200]. The temperature argument is
/// accepted for interface parity but does not influence the estimate.
pub fn air_quality(_temp_c: f64, rng: &mut impl Rng) -> u16 {
    let base: u16 = rng.random_range(50..150);
    base.min(200)
}
