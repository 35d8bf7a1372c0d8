mod intent;
mod not_found;

use intentd::services::launcher::AppLauncher;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, Reply};

pub fn routes(
    launcher: Arc<dyn AppLauncher>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    intent::route(launcher).or(not_found::route())
}
