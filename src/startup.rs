use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    response::Response,
    routing::{delete, get, post, put},
    serve::Serve,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Span, field, info, info_span};
use uuid::Uuid;

use crate::{
    configuration::Settings,
    routes::{
        campaigns, clear_recipients, commit_recipient, composer_templates, create_draft,
        dashboard, discard_draft, get_draft, health_check, login, marketplace, remove_recipient,
        submit_campaign, update_body, update_subject, upload_recipients,
    },
    session::SessionStore,
};

pub struct ApplicationBaseUrl(pub String);

pub struct AppState {
    pub sessions: SessionStore,
    pub base_url: ApplicationBaseUrl,
}

pub async fn run(
    listener: TcpListener,
    base_url: String,
    max_upload_bytes: usize,
) -> anyhow::Result<Serve<TcpListener, Router, Router>> {
    // Handlers share one session store through the Arc.
    let app_state = Arc::new(AppState {
        sessions: SessionStore::new(),
        base_url: ApplicationBaseUrl(base_url),
    });
    let app = Router::new()
        .route("/health_check", get(health_check))
        .route("/login", post(login))
        .route("/dashboard", get(dashboard))
        .route("/campaigns", get(campaigns))
        .route("/templates", get(marketplace))
        .route("/templates/composer", get(composer_templates))
        .route("/campaigns/drafts", post(create_draft))
        .route(
            "/campaigns/drafts/{id}",
            get(get_draft).delete(discard_draft),
        )
        .route("/campaigns/drafts/{id}/subject", put(update_subject))
        .route("/campaigns/drafts/{id}/body", put(update_body))
        .route(
            "/campaigns/drafts/{id}/recipients",
            post(commit_recipient).delete(clear_recipients),
        )
        .route(
            "/campaigns/drafts/{id}/recipients/upload",
            post(upload_recipients).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/campaigns/drafts/{id}/recipients/{index}",
            delete(remove_recipient),
        )
        .route(
            "/campaigns/drafts/{id}/actions/{action}",
            post(submit_campaign),
        )
        .with_state(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = Uuid::new_v4();
                    info_span!(
                        "http_request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        request_id = ?request_id,
                        status = field::Empty,
                    )
                })
                .on_response(|response: &Response, latency: Duration, span: &Span| {
                    let status = response.status();
                    span.record("status", status.as_u16());
                    info!(parent: span, ?status, ?latency, "Response sent");
                }),
        );

    Ok(axum::serve(listener, app))
}

pub struct Application {
    port: u16,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    // build binds the listener and hands it to `run()`;
    // the server only starts polling in `run_until_stopped`
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))
        .await?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            configuration.application.base_url,
            configuration.composer.max_upload_bytes,
        )
        .await?;

        Ok(Self { server, port })
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        Ok(self.server.await?)
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
