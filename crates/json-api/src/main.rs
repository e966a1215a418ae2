//! Ordering JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use ordering_app::context::AppContext;

use crate::{
    config::{ConfigError, ServerConfig},
    observability::Observability,
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod carts;
mod categories;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod products;
mod profiles;
mod requests;
mod responses;
mod router;
mod security;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Ordering JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(ConfigError::Parse(parse_error)) => parse_error.exit(),
        Err(config_error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {config_error}");
            }

            process::exit(1);
        }
    };

    if let Err(init_error) = Observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "observability failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability initialization error: {init_error}");
        }

        process::exit(1);
    }

    let verify_tokens = config.server.app_env.verifies_tokens();

    let app = match AppContext::from_config(
        &config.database.database_url,
        config.auth.settings(verify_tokens),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(app_env = ?config.server.app_env, "starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let api = if verify_tokens {
        router::api_router().hoop(auth::bearer::handler)
    } else {
        warn!("trusting the `user` request body field as the caller identity");

        router::api_router().hoop(auth::body::handler)
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app.clone())))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(api);

    let doc = OpenApi::new("Ordering API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer).bearer_format("JWT")),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service =
        Service::new(router).hoop(security::cors(config.http.cors_allowed_origin.as_deref()));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;

    app.close().await;

    info!("server stopped");
}
