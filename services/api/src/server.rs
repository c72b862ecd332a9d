use crate::cli::ServeArgs;
use crate::infra::{in_memory_service, AppState};
use crate::routes::build_app;
use axum_prometheus::PrometheusMetricLayer;
use receipt_rewards::config::AppConfig;
use receipt_rewards::error::AppError;
use receipt_rewards::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let (service, _store) = in_memory_service();
    let app = build_app(service, app_state, config.server.request_timeout).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        request_timeout = ?config.server.request_timeout,
        "receipt rewards service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
