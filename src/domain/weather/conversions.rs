pub const MPS_TO_KMH: f64 = 3.6;

#[must_use]
pub fn mps_to_kmh(speed: f64) -> f64 {
    speed * MPS_TO_KMH
}

#[must_use]
pub fn m_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

#[must_use]
pub fn round_i32(value: f64) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
