use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::connector::api::Container;
use crate::domain::{Action, Session, SessionEvent};

use super::page::{self, PageView};
use super::session_store::SessionStore;

pub const SESSION_COOKIE: &str = "triage_session";

pub struct WebState {
    container: Arc<Container>,
    sessions: SessionStore,
}

/// Posted by the form's three buttons.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    pub action: String,
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
    pub credential_configured: bool,
    pub client_ready: bool,
}

pub fn router(container: Arc<Container>) -> axum::Router {
    let state = Arc::new(WebState {
        container,
        sessions: SessionStore::new(),
    });

    axum::Router::new()
        .route("/", get(index))
        .route("/action", post(action))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Triage form listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(container)).await?;
    Ok(())
}

async fn index(State(state): State<Arc<WebState>>, headers: HeaderMap) -> Response {
    let (id, is_new) = session_id(&headers);
    let provider = state.container.provider();

    // A session is only stored once the browser posts an action.
    let handle = if is_new {
        None
    } else {
        state.sessions.get(&id).await
    };
    let (session, notice) = match handle {
        Some(handle) => {
            let mut web = handle.lock().await;
            let notice = web.notice.take();
            (web.session.clone(), notice)
        }
        None => (Session::default(), None),
    };

    let html = page::render(&PageView {
        session: &session,
        notice: notice.as_ref(),
        credential_configured: provider.credential_configured(),
        init_error: provider.init_error(),
        model: state.container.model(),
    });

    with_session_cookie(Html(html).into_response(), &id, is_new)
}

async fn action(
    State(state): State<Arc<WebState>>,
    headers: HeaderMap,
    Form(form): Form<ActionForm>,
) -> Response {
    let action = match form.action.as_str() {
        "load_example" => Action::LoadExample,
        "clear" => Action::Clear,
        "submit" => Action::Submit(form.input.clone()),
        other => {
            return (StatusCode::BAD_REQUEST, format!("Unknown action: {other}")).into_response();
        }
    };

    let (id, is_new) = session_id(&headers);
    let handle = state.sessions.get_or_create(&id).await;
    {
        let mut web = handle.lock().await;
        debug!("Session {id}: {}", form.action);
        let session = web.session.clone().reduce(SessionEvent::InputEdited(form.input));
        let transition = state
            .container
            .interaction_use_case()
            .dispatch(session, action)
            .await;
        web.session = transition.session;
        web.notice = transition.notice;
    }

    with_session_cookie(Redirect::to("/").into_response(), &id, is_new)
}

async fn health(State(state): State<Arc<WebState>>) -> Json<HealthResponse> {
    let provider = state.container.provider();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.container.model().to_string(),
        credential_configured: provider.credential_configured(),
        client_ready: provider.client().is_some(),
    })
}

/// Returns the session id from the request cookie, or a fresh one. The
/// boolean is `true` when the id was just minted.
fn session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok());

    match existing {
        Some(id) => (id.to_string(), false),
        None => (Uuid::new_v4().to_string(), true),
    }
}

fn with_session_cookie(mut response: Response, id: &str, is_new: bool) -> Response {
    if is_new {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;

    fn mock_state() -> Arc<WebState> {
        let container = Container::new(ContainerConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            verify_tls: false,
            mock_llm: true,
        });
        Arc::new(WebState {
            container: Arc::new(container),
            sessions: SessionStore::new(),
        })
    }

    #[tokio::test]
    async fn cookieless_page_views_store_nothing() {
        let state = mock_state();

        for _ in 0..500 {
            let response = index(State(state.clone()), HeaderMap::new()).await;
            assert!(response.headers().contains_key(SET_COOKIE));
        }

        assert_eq!(state.sessions.len().await, 0);
    }

    #[tokio::test]
    async fn unknown_cookie_renders_without_storing() {
        let state = mock_state();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("{SESSION_COOKIE}={}", Uuid::new_v4())).unwrap(),
        );

        let response = index(State(state.clone()), headers).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response.headers().contains_key(SET_COOKIE));
        assert_eq!(state.sessions.len().await, 0);
    }

    #[tokio::test]
    async fn first_action_stores_the_session() {
        let state = mock_state();
        let form = ActionForm {
            action: "load_example".to_string(),
            input: String::new(),
        };

        let response = action(State(state.clone()), HeaderMap::new(), Form(form)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(response.headers().contains_key(SET_COOKIE));
        assert_eq!(state.sessions.len().await, 1);
    }

    #[test]
    fn reuses_valid_session_cookie() {
        let id = Uuid::new_v4().to_string();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}")).unwrap(),
        );

        assert_eq!(session_id(&headers), (id, false));
    }

    #[test]
    fn mints_id_for_missing_or_malformed_cookie() {
        let (_, is_new) = session_id(&HeaderMap::new());
        assert!(is_new);

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("triage_session=not-a-uuid"),
        );
        let (id, is_new) = session_id(&headers);
        assert!(is_new);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
