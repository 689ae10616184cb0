use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use portfolio_api::{
    background_task::start_rate_limit_sweep,
    graceful_shutdown::shutdown_signal,
    middlewares::cors::build_cors,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config)?);
    let cors_origins = config.cors_origins();

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Portfolio API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let sweeper = tokio::spawn(start_rate_limit_sweep(
        app_state.contact_handler.rate_limiter.clone()
    ));

    let server = HttpServer::new({
        let app_state = app_state.clone();
        move || {
            App::new()
                .app_data(app_state.clone())
                .wrap(build_cors(&cors_origins))
                .wrap(NormalizePath::trim())
                .wrap(TracingLogger::default())
                .configure(configure_routes)
        }
    })
    .workers(config.worker_count.max(1))
    .disable_signals()
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {server_addr}"))?
    .run();

    let handle = server.handle();
    let mut server_task = actix_rt::spawn(server);

    tokio::select! {
        res = &mut server_task => {
            sweeper.abort();
            res.context("server task panicked")?.context("server error")?;
            return Ok(());
        }
        signal = shutdown_signal() => {
            tracing::info!(%signal, "Stopping HTTP server");
        }
    }

    handle.stop(true).await;
    sweeper.abort();

    if let Err(e) = server_task.await {
        tracing::error!("Server task ended abnormally: {}", e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
