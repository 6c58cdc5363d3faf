use crate::cli::ServeArgs;
use crate::infra::{seeded_repository, AppState, InMemoryStatusNotifier};
use crate::routes::with_operational_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use civiform::applications::{admin_router, AdminState, ProgramAdminService};
use civiform::auth::{login_router, LoginPage};
use civiform::config::AppConfig;
use civiform::error::AppError;
use civiform::i18n::{MessageCatalog, Messages};
use civiform::telemetry;
use civiform::views::{BaseHtmlLayout, LoginForm, ProgramApplicationView};
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

    let app = build_app(&config)?
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "civiform views ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Login and admin review pages over the seeded in-memory store, plus operational routes.
pub(crate) fn build_app(config: &AppConfig) -> Result<Router, AppError> {
    let messages: Arc<dyn Messages> = Arc::new(MessageCatalog::en_us());
    let layout = BaseHtmlLayout::default();

    let login = LoginPage::new(LoginForm::from_config(layout.clone(), config), messages.clone());

    let service = ProgramAdminService::new(
        Arc::new(seeded_repository()?),
        Arc::new(InMemoryStatusNotifier::default()),
    );
    let view = ProgramApplicationView::new(layout, messages);
    let admin = AdminState::new(Arc::new(service), Arc::new(view));

    let pages = login_router(Arc::new(login)).merge(admin_router(Arc::new(admin)));
    Ok(with_operational_routes(pages))
}
