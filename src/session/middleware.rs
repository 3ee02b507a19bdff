use super::store::{SessionId, SessionStore};
use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "sid";

/// Handle to the current request's session.
///
/// Extract it in a handler with `Extension<Session>`.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    store: SessionStore,
}

impl Session {
    /// Queue a notice to be shown on the next page that reads `key`.
    pub fn flash(&self, key: &str, message: impl Into<String>) {
        self.store.set_notice(self.id, key, message);
    }

    /// Take (and clear) the notices queued under `key`.
    pub fn take_flash(&self, key: &str) -> Vec<String> {
        self.store.take_notices(self.id, key)
    }
}

/// Find the session id in the request's `Cookie` headers.
fn session_id_from_cookies(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.trim().parse().ok())
}

fn session_cookie(id: SessionId, store: &SessionStore) -> Option<HeaderValue> {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        id,
        store.ttl().as_secs()
    );
    HeaderValue::from_str(&cookie).ok()
}

/// Attach a [`Session`] to every request and refresh its cookie.
pub async fn session_middleware(
    State(store): State<SessionStore>,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = session_id_from_cookies(request.headers());
    let id = store.resume_or_start(presented);

    request.extensions_mut().insert(Session {
        id,
        store: store.clone(),
    });

    let mut response = next.run(request).await;

    if let Some(cookie) = session_cookie(id, &store) {
        response.headers_mut().append(SET_COOKIE, cookie);
    }

    response
}
