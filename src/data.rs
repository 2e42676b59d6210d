pub mod geoip;
pub mod owm;
