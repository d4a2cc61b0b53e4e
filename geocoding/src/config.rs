use lazy_static::lazy_static;
use serde::Deserialize;
use shared_kernel::configuration::config;

#[derive(Deserialize)]
pub struct Settings {
    pub geocoding: GeocodingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingSettings {
    /// Nominatim instance, e.g. `https://nominatim.openstreetmap.org`.
    pub host: String,
}

lazy_static! {
    pub static ref SETTINGS_CONFIG: Settings = config::<Settings>().unwrap();
}
