use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_form_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use formflow::config::AppConfig;
use formflow::error::AppError;
use formflow::forms::{FormService, JsonFileStore, SubmissionRepository};
use formflow::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(kind) = args.form.take() {
        config.form.kind = kind;
    }
    if let Some(path) = args.submissions_path.take() {
        config.form.submissions_path = path;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = JsonFileStore::new(&config.form.submissions_path);
    let stored = store.load().len();
    let service = Arc::new(FormService::new(config.form.kind, Arc::new(store)));

    let app = with_form_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        form = %config.form.kind,
        submissions = stored,
        path = %config.form.submissions_path.display(),
        "form service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
