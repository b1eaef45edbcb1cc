mod carousel;
mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_dashboard;
mod manager_identity;
mod manager_owm;
mod presenter;

use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use tokio::sync::Mutex;
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_dashboard::{start_fetch, Dashboard};
use crate::manager_identity::LocalSession;
use crate::manager_owm::OWM;

struct AppState {
    owm: Arc<OWM>,
    dashboard: Arc<Mutex<Dashboard>>,
    session: Mutex<LocalSession>,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    let owm = Arc::new(OWM::new(
        &config.provider.base_url,
        &config.provider.api_key,
        config.provider.timeout_secs,
    )?);
    let dashboard = Arc::new(Mutex::new(Dashboard::new()));

    start_fetch(dashboard.clone(), owm.clone(), config.provider.default_city.clone()).await;

    let state = web::Data::new(AppState {
        owm,
        dashboard,
        session: Mutex::new(LocalSession::new(config.auth.login_url.clone())),
    });

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::routes)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
