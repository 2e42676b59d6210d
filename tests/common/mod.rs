#![allow(dead_code)]

use serde_json::{Value, json};

pub const BASE_TS: i64 = 1_767_225_600; // 2026-01-01 00:00 UTC

pub fn current_payload(name: &str, condition: &str, temp: f64) -> Value {
    json!({
        "name": name,
        "dt": BASE_TS,
        "main": { "temp": temp, "humidity": 60.0, "pressure": 1010.0 },
        "weather": [{ "main": condition, "description": "fixture weather" }],
        "wind": { "speed": 4.0 },
        "visibility": 9000,
        "sys": { "sunrise": BASE_TS + 12_600, "sunset": BASE_TS + 52_200 }
    })
}

pub fn forecast_payload(items: &[(i64, f64, &str)]) -> Value {
    let list: Vec<Value> = items
        .iter()
        .map(|(dt, temp, condition)| forecast_item(*dt, *temp, condition))
        .collect();
    json!({ "list": list })
}

pub fn forecast_item(dt: i64, temp: f64, condition: &str) -> Value {
    json!({
        "dt": dt,
        "main": { "temp": temp, "humidity": 60.0 },
        "weather": [{ "main": condition, "description": "fixture weather" }],
        "wind": { "speed": 4.0 },
        "visibility": 9000
    })
}

/// Five days of 3-hourly samples, eight per day, the shape the forecast
/// endpoint returns.
pub fn five_day_forecast_payload() -> Value {
    let mut items = Vec::new();
    for day in 0..5_i64 {
        for slot in 0..8_i64 {
            items.push((
                BASE_TS + day * 86_400 + slot * 3 * 3600,
                10.0 + day as f64,
                "Clouds",
            ));
        }
    }
    forecast_payload(&items)
}
