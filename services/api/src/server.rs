use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::build_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use keam_rank::config::AppConfig;
use keam_rank::error::AppError;
use keam_rank::prediction::RankPredictor;
use keam_rank::telemetry;
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

    let predictor = Arc::new(RankPredictor::from_config(&config.prediction));

    let app = build_router(predictor)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        rank_margin = config.prediction.rank_margin,
        subject_ceiling = config.prediction.subject_ceiling,
        "rank predictor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
