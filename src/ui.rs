use crate::domain::display::CurrentDisplay;
use crate::domain::weather::DailySummary;
use crate::domain::weather::conversions::capitalize_first;

/// Prints the dashboard. Pure formatting over the display records; all
/// units arrive already converted.
pub fn render(current: &CurrentDisplay, days: &[DailySummary], labels: &[String]) {
    println!();
    println!("  {}", current.location_label);
    println!("  {}°C  {}", current.temperature_c, current.condition_text);
    println!();
    println!("  UV index      {}", current.uv_index);
    println!("  Wind          {:.2} km/h", current.wind_kmh);
    println!("  Sunrise       {}", current.sunrise);
    println!("  Sunset        {}", current.sunset);
    println!("  Humidity      {}%", current.humidity);
    println!("  Visibility    {:.1} km", current.visibility_km);
    println!("  Air quality   {}", current.air_quality);
    println!("  Pressure      {} hPa", current.pressure_hpa);
    println!();

    for (day, label) in days.iter().zip(labels) {
        println!(
            "  {label:<9} {:>3}° / {:>3}°  rain {:>3}%  wind {:>3} km/h  humidity {:>3}%  visibility {:>2} km",
            day.max_temp,
            day.min_temp,
            day.rain_chance,
            day.avg_wind_kmh,
            day.avg_humidity,
            day.avg_visibility_km,
        );
        if !day.description.is_empty() {
            println!("            {}", capitalize_first(&day.description));
        }
    }
    println!();
}
