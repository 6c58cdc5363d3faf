use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::i18n::Messages;
use crate::routes;
use crate::views::{LoginForm, RequestContext};

/// Login form plus the catalog used to localize it.
pub struct LoginPage {
    form: LoginForm,
    messages: Arc<dyn Messages>,
}

impl LoginPage {
    pub fn new(form: LoginForm, messages: Arc<dyn Messages>) -> Self {
        Self { form, messages }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginQuery {
    message: Option<String>,
}

pub fn login_router(page: Arc<LoginPage>) -> Router {
    Router::new()
        .route(routes::LOGIN, get(login_handler))
        .with_state(page)
}

pub(crate) async fn login_handler(
    State(page): State<Arc<LoginPage>>,
    Query(query): Query<LoginQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let request = RequestContext::from_headers(&headers);
    let document = page
        .form
        .render(&request, page.messages.as_ref(), query.message.as_deref());
    Html(document.to_html())
}
