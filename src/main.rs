use crate::config::ServerConfig;
use crate::domain::Catalog;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod request;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    // Built once; every worker borrows the same catalog.
    let catalog = Catalog::seeded();
    if catalog.is_empty() {
        tracing::warn!("catalog is empty; every search will return []");
    } else {
        tracing::info!(listings = catalog.len(), "catalog loaded");
    }

    tracing::info!(max_workers = config.max_workers, "Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
