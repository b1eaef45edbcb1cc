pub mod errors;
pub mod models;

use std::time::Duration;
use log::info;
use reqwest::Client;
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::{ForecastResponse, ProviderMessage, RawForecast};
use crate::presenter::select_window;


/// Struct for fetching 5 day forecasts from OpenWeatherMap
pub struct OWM {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OWM {
    /// Returns an OWM struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'base_url' - api base url, e.g. https://api.openweathermap.org/data/2.5
    /// * 'api_key' - the application id to send with each request
    /// * 'timeout_secs' - request timeout in seconds
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<OWM, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Retrieves the 5 day / 3 hour forecast for the given city.
    /// The document is validated for shape before anything else touches it, and the
    /// returned forecast only carries the display window (first 40 intervals).
    ///
    /// # Arguments
    ///
    /// * 'city' - free text city query, passed on as is
    pub async fn forecast(&self, city: &str) -> Result<ForecastResponse, OWMError> {
        let url = format!("{}/forecast", self.base_url);

        let req = self.client
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send().await?;

        let status = req.status();
        let body = req.text().await?;
        if !status.is_success() {
            let reason = match serde_json::from_str::<ProviderMessage>(&body) {
                Ok(m) => format!("{} ({})", status, m.message),
                Err(_) => status.to_string(),
            };
            return Err(OWMError::Transport(format!("Error while fetching forecast for '{}': {}", city, reason)));
        }

        let forecast = validate(serde_json::from_str(&body)?)?;
        info!("received {} intervals for {}", forecast.list.len(), forecast.city.name);

        Ok(ForecastResponse { list: select_window(&forecast), city: forecast.city })
    }
}

/// Checks that both top level fields are present
///
/// # Arguments
///
/// * 'raw' - the decoded document
fn validate(raw: RawForecast) -> Result<ForecastResponse, OWMError> {
    match (raw.city, raw.list) {
        (Some(city), Some(list)) => Ok(ForecastResponse { city, list }),
        (None, _) => Err(OWMError::InvalidShape("missing 'city'".to_string())),
        (_, None) => Err(OWMError::InvalidShape("missing 'list'".to_string())),
    }
}
