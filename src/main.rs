mod routes;

use anyhow::Result;
use intentd::configs::load_config;
use intentd::services::launcher::{AppLauncher, HostLauncher};
use intentd::utils::logger::init_logger;
use log::info;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

fn parse_addr(ip: &str) -> Ipv4Addr {
    ip.parse().unwrap_or_else(|_| {
        eprintln!("Invalid IP address '{}', defaulting to 127.0.0.1", ip);
        Ipv4Addr::new(127, 0, 0, 1)
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;

    init_logger(config.log_file().as_deref(), &config.log_level)?;

    let launcher: Arc<dyn AppLauncher> = Arc::new(HostLauncher::new(config.bridge_url.clone()));
    let socket_address = SocketAddr::new(parse_addr(&config.listen_addr).into(), config.port);

    info!("Server listening on {}", socket_address);
    warp::serve(routes::routes(launcher)).run(socket_address).await;

    Ok(())
}
