use std::{collections::HashMap, sync::Arc};

use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::types::Health;

use crate::connector::Connector;
use crate::dispatch::Dispatcher;
use crate::errors::ApiError;
use crate::event::{ApiEvent, ApiResponse};

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut res = (status, Body::from(self.body)).into_response();
        let headers = res.headers_mut();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (HeaderName::try_from(name.as_str()), HeaderValue::from_str(value)) {
                headers.insert(name, value);
            }
        }
        res
    }
}

/// Translate an HTTP request into an event: method, `?path=`, headers and raw body.
pub fn to_event(method: &Method, query: HashMap<String, String>, headers: &HeaderMap, body: String) -> ApiEvent {
    let headers = headers
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    ApiEvent {
        http_method: Some(method.as_str().to_string()),
        query_string_parameters: Some(query),
        headers: Some(headers),
        body: (!body.is_empty()).then_some(body),
    }
}

async fn invoke<C: Connector + 'static>(
    State(dispatcher): State<Arc<Dispatcher<C>>>,
    method: Method,
    query: Option<Query<HashMap<String, String>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse, ApiError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let body = String::from_utf8_lossy(&body).into_owned();
    let event = to_event(&method, query, &headers, body);
    Ok(dispatcher.dispatch(&event).await?)
}

/// Every request other than `/health` goes to the dispatcher, whatever its URL path;
/// the operation is picked by the `path` query parameter.
pub fn build_router<C: Connector + 'static>(dispatcher: Arc<Dispatcher<C>>) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(invoke::<C>)
        .with_state(dispatcher)
        // Also covers replies axum builds itself, e.g. 405 and 413.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
