use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Main {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// One 3-hour sample of the forecast, temperature in kelvin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt_txt: String,
    pub main: Main,
    #[serde(default)]
    pub weather: Vec<Weather>,
    pub wind: Wind,
}

/// A validated forecast document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResponse {
    pub city: City,
    pub list: Vec<ForecastEntry>,
}

/// The document as it comes off the wire, where both top level fields may be missing
/// when the provider answers with an error-shaped payload.
#[derive(Deserialize)]
pub struct RawForecast {
    pub city: Option<City>,
    pub list: Option<Vec<ForecastEntry>>,
}

/// Error-shaped payload, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Deserialize)]
pub struct ProviderMessage {
    pub message: String,
}
