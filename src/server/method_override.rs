//! Method override for HTML forms.
//!
//! Browsers only submit forms as GET or POST. A POST whose query string
//! carries `_method=PUT` (or `DELETE`, `PATCH`) is routed as that method.
//! This runs before routing, so it wraps the router rather than being
//! added as a route layer.

use axum::extract::{Query, Request};
use axum::http::{Method, Uri};
use serde::Deserialize;

/// The `_method` query parameter naming the intended method.
#[derive(Debug, Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

fn requested_method(uri: &Uri) -> Option<Method> {
    let Query(query) = Query::<OverrideQuery>::try_from_uri(uri).ok()?;
    let value = query.method?;

    match value.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        "PATCH" => Some(Method::PATCH),
        _ => None,
    }
}

/// Rewrite a POST request's method from its `_method` query parameter.
pub fn override_method(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    let method = requested_method(request.uri());
    if let Some(method) = method {
        tracing::trace!(method = %method, "Overriding POST method");
        *request.method_mut() = method;
    }

    request
}
