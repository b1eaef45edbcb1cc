use actix_web::{get, http::header, web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::AppState;
use crate::carousel::CAROUSEL_SETTINGS;
use crate::manager_dashboard::{start_fetch, ViewState};
use crate::manager_identity::{IdentityProvider, Profile};
use crate::presenter::{present, Presentation};

#[derive(Deserialize, Debug)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Deserialize, Debug)]
struct CarouselParams {
    width: Option<u32>,
}

#[derive(Deserialize, Debug)]
struct CallbackParams {
    name: String,
}

#[derive(Serialize)]
struct DashboardView<'a> {
    query: &'a str,
    status: &'static str,
    message: Option<&'a str>,
    presentation: Option<Presentation>,
    profile: Profile,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(forecast)
        .service(search)
        .service(state)
        .service(carousel)
        .service(login)
        .service(login_callback)
        .service(logout);
}

#[get("/forecast")]
async fn forecast(params: web::Query<SearchParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    match data.owm.forecast(&params.q).await {
        Ok(f) => HttpResponse::Ok().json(present(&f)),
        Err(e) => {
            error!("failed to get forecast: {}", e);
            HttpResponse::BadGateway().json(json!({ "error": e.to_string() }))
        }
    }
}

/// Starts a fetch cycle for the submitted text, refused while the search bar is hidden
#[get("/search")]
async fn search(params: web::Query<SearchParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    if !data.session.lock().await.profile().search_visible {
        return HttpResponse::Forbidden().finish();
    }

    let request_id = start_fetch(data.dashboard.clone(), data.owm.clone(), params.into_inner().q).await;

    HttpResponse::Accepted().json(json!({ "request_id": request_id }))
}

#[get("/state")]
async fn state(data: web::Data<AppState>) -> impl Responder {
    let profile = data.session.lock().await.profile();
    let dashboard = data.dashboard.lock().await;

    let (status, message, presentation) = match dashboard.state() {
        ViewState::Loading => ("loading", None, None),
        ViewState::Failed(m) => ("failed", Some(m.as_str()), None),
        ViewState::Ready(f) => ("ready", None, Some(present(f))),
    };

    HttpResponse::Ok().json(DashboardView {
        query: dashboard.query(),
        status,
        message,
        presentation,
        profile,
    })
}

#[get("/carousel")]
async fn carousel(params: web::Query<CarouselParams>) -> impl Responder {
    match params.width {
        Some(width) => HttpResponse::Ok().json(CAROUSEL_SETTINGS.effective(width)),
        None => HttpResponse::Ok().json(CAROUSEL_SETTINGS),
    }
}

#[get("/login")]
async fn login(data: web::Data<AppState>) -> impl Responder {
    match data.session.lock().await.begin_login() {
        Some(url) => HttpResponse::Found().insert_header((header::LOCATION, url)).finish(),
        None => HttpResponse::NotFound().finish(),
    }
}

#[get("/login/callback")]
async fn login_callback(params: web::Query<CallbackParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    data.session.lock().await.complete_login(&params.name);

    HttpResponse::Found().insert_header((header::LOCATION, "/state")).finish()
}

#[get("/logout")]
async fn logout(data: web::Data<AppState>) -> impl Responder {
    data.session.lock().await.log_out();

    HttpResponse::Found().insert_header((header::LOCATION, "/state")).finish()
}
