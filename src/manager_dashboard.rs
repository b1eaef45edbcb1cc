use std::sync::Arc;
use log::{error, info};
use tokio::sync::Mutex;
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::ForecastResponse;
use crate::manager_owm::OWM;

/// What the dashboard is showing, exactly one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Failed(String),
    Ready(ForecastResponse),
}

/// Holds the active query and the result of the latest fetch for it
pub struct Dashboard {
    query: String,
    latest_request: u64,
    state: ViewState,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Dashboard { query: String::new(), latest_request: 0, state: ViewState::Loading }
    }

    /// Replaces the active query and issues a new request id, superseding any fetch in flight
    ///
    /// # Arguments
    ///
    /// * 'query' - the submitted city text, possibly empty
    pub fn begin(&mut self, query: &str) -> u64 {
        self.latest_request += 1;
        self.query = query.to_string();
        self.state = ViewState::Loading;

        self.latest_request
    }

    /// Applies the outcome of a fetch if it belongs to the latest request, returns false if
    /// it was superseded and dropped.
    ///
    /// # Arguments
    ///
    /// * 'request_id' - the id handed out by `begin`
    /// * 'outcome' - result of the fetch
    pub fn resolve(&mut self, request_id: u64, outcome: Result<ForecastResponse, OWMError>) -> bool {
        if request_id != self.latest_request {
            return false;
        }

        self.state = match outcome {
            Ok(forecast) => ViewState::Ready(forecast),
            Err(e) => ViewState::Failed(e.to_string()),
        };

        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }
}

/// Registers the query and fetches it in the background, returns the request id
///
/// # Arguments
///
/// * 'dashboard' - shared dashboard state
/// * 'owm' - forecast provider
/// * 'query' - city to fetch
pub async fn start_fetch(dashboard: Arc<Mutex<Dashboard>>, owm: Arc<OWM>, query: String) -> u64 {
    let request_id = dashboard.lock().await.begin(&query);
    info!("request {} started for '{}'", request_id, query);

    tokio::spawn(complete_fetch(dashboard, owm, request_id, query));

    request_id
}

/// Fetches the forecast and applies it unless the request has been superseded meanwhile
///
/// # Arguments
///
/// * 'dashboard' - shared dashboard state
/// * 'owm' - forecast provider
/// * 'request_id' - id handed out by `Dashboard::begin`
/// * 'query' - city to fetch
pub async fn complete_fetch(dashboard: Arc<Mutex<Dashboard>>, owm: Arc<OWM>, request_id: u64, query: String) {
    let outcome = owm.forecast(&query).await;
    if let Err(e) = &outcome {
        error!("request {} failed: {}", request_id, e);
    }

    if !dashboard.lock().await.resolve(request_id, outcome) {
        info!("request {} superseded, result dropped", request_id);
    }
}
