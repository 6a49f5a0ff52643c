use crate::app::AppState;
use crate::config::AppConfig;
use crate::responses::error_response;
use crate::router::handle;
use astra::{Request, Server};
use tracing_subscriber::EnvFilter;

mod app;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod params;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "database initialization failed");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, workers, db = state.db.path(), "starting server");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!(%method, %path, error = %err, "request failed");
                } else {
                    tracing::debug!(%method, %path, status = err.status(), error = %err, "request rejected");
                }
                error_response(&err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
