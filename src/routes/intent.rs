use intentd::commands;
use intentd::services::launcher::AppLauncher;
use intentd::types::intent::IntentUrl;
use std::collections::HashMap;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

pub fn route(
    launcher: Arc<dyn AppLauncher>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::get()
        .and(warp::path("intent"))
        .and(warp::path::end())
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::any().map(move || Arc::clone(&launcher)))
        .and_then(handle_intent)
}

async fn handle_intent(
    query: HashMap<String, String>,
    launcher: Arc<dyn AppLauncher>,
) -> Result<impl Reply, Rejection> {
    let url = IntentUrl::new("/intent", query);

    commands::dispatch(&url, launcher);

    Ok(warp::reply::with_status(
        warp::reply(),
        warp::http::StatusCode::NO_CONTENT,
    ))
}
