//! Per-browser session state.
//!
//! Each browser gets a random session id carried in a signed cookie. The
//! case state itself stays on the server in a [`SessionStore`]; sessions idle
//! longer than the configured TTL are dropped.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue},
    response::{IntoResponse, Response},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use legal_help_common::ValidationError;

use crate::app::AppState;

type HmacSha256 = Hmac<Sha256>;

pub const COOKIE_NAME: &str = "lh_session";

/// Map size above which expired sessions are swept before storing a new one.
const PRUNE_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

// --- Case state ---

/// What one user has produced so far. Feedback never exists without the
/// scenario it critiques.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseSession {
    scenario: Option<String>,
    user_solution: Option<String>,
    analysis_feedback: Option<String>,
}

impl CaseSession {
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    pub fn user_solution(&self) -> Option<&str> {
        self.user_solution.as_deref()
    }

    pub fn analysis_feedback(&self) -> Option<&str> {
        self.analysis_feedback.as_deref()
    }

    /// Store a fresh scenario. Any earlier solution and feedback belonged to
    /// the previous scenario and are cleared.
    pub fn record_scenario(&mut self, scenario: String) {
        self.scenario = Some(scenario);
        self.user_solution = None;
        self.analysis_feedback = None;
    }

    pub fn record_analysis(
        &mut self,
        solution: String,
        feedback: String,
    ) -> Result<(), ValidationError> {
        if self.scenario.is_none() {
            return Err(ValidationError::NoScenario);
        }
        self.user_solution = Some(solution);
        self.analysis_feedback = Some(feedback);
        Ok(())
    }
}

// --- Store ---

struct Entry {
    session: CaseSession,
    last_seen: Instant,
}

pub struct SessionStore {
    entries: Mutex<HashMap<SessionId, Entry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Resume the session for `id`, or hand out a new id. Returns the id in
    /// use, a snapshot of its state, and whether a new id was issued.
    ///
    /// Nothing is stored here: a session only takes space once [`update`]
    /// writes to it. A known id whose state has expired keeps its id but
    /// starts empty.
    ///
    /// [`update`]: SessionStore::update
    pub async fn get_or_create(
        &self,
        id: Option<SessionId>,
        now: Instant,
    ) -> (SessionId, CaseSession, bool) {
        let Some(id) = id else {
            return (SessionId::new(), CaseSession::default(), true);
        };

        let mut entries = self.entries.lock().await;
        let expired = entries
            .get(&id)
            .is_some_and(|e| now.duration_since(e.last_seen) > self.ttl);
        if expired {
            entries.remove(&id);
        }

        let session = entries
            .get_mut(&id)
            .map(|entry| {
                entry.last_seen = now;
                entry.session.clone()
            })
            .unwrap_or_default();
        (id, session, false)
    }

    /// Apply `f` to the session's state, storing the session on first write.
    /// The lock is held only for `f`, so never call the model from inside it.
    pub async fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut CaseSession) -> R) -> R {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(&id) {
            if entries.len() >= PRUNE_THRESHOLD {
                prune(&mut entries, now, self.ttl);
            }
            debug!(sessions = entries.len() + 1, "Storing new session");
        }
        let entry = entries.entry(id).or_insert_with(|| Entry {
            session: CaseSession::default(),
            last_seen: now,
        });
        entry.last_seen = now;
        f(&mut entry.session)
    }

    #[cfg(test)]
    async fn snapshot(&self, id: SessionId) -> Option<CaseSession> {
        self.entries.lock().await.get(&id).map(|e| e.session.clone())
    }

    /// Drop sessions idle longer than the TTL. Returns how many were removed.
    pub async fn prune_expired(&self, now: Instant) -> usize {
        let mut entries = self.entries.lock().await;
        let removed = prune(&mut entries, now, self.ttl);
        if removed > 0 {
            debug!(removed, remaining = entries.len(), "Pruned expired sessions");
        }
        removed
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

fn prune(entries: &mut HashMap<SessionId, Entry>, now: Instant, ttl: Duration) -> usize {
    let before = entries.len();
    entries.retain(|_, e| now.duration_since(e.last_seen) <= ttl);
    before - entries.len()
}

// --- Cookie ---

/// Cookie value: `id|hex(hmac_sha256(id))`.
pub fn sign_session_id(id: SessionId, secret: &str) -> String {
    let payload = id.to_string();
    let sig = hex::encode(mac(&payload, secret).finalize().into_bytes());
    format!("{payload}|{sig}")
}

/// Verify a cookie value and recover the id. Unsigned or tampered values
/// yield `None`.
pub fn verify_session_id(value: &str, secret: &str) -> Option<SessionId> {
    let (payload, sig) = value.split_once('|')?;
    let sig = hex::decode(sig).ok()?;
    mac(payload, secret).verify_slice(&sig).ok()?;
    Uuid::try_parse(payload).ok().map(SessionId)
}

fn mac(payload: &str, secret: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac
}

/// Build the Set-Cookie header value. No Max-Age: the cookie ends with the
/// browser session. Release builds add `Secure`.
pub fn session_cookie(id: SessionId, secret: &str) -> String {
    let value = sign_session_id(id, secret);
    let secure = if cfg!(debug_assertions) { "" } else { "; Secure" };
    format!("{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax{secure}")
}

/// Parse a specific cookie from the Cookie header string.
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(name) {
            if let Some(value) = value.strip_prefix('=') {
                return Some(value);
            }
        }
    }
    None
}

// --- Extractor ---

/// The caller's session, resolved from the cookie. Handlers must pass their
/// response through [`SessionHandle::respond`] so new sessions get a cookie.
pub struct SessionHandle {
    pub id: SessionId,
    pub state: CaseSession,
    pub created: bool,
    secret: Arc<str>,
}

impl SessionHandle {
    pub fn respond(self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.created {
            match HeaderValue::from_str(&session_cookie(self.id, &self.secret)) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => warn!(error = %e, "Failed to build session cookie"),
            }
        }
        response
    }
}

impl FromRequestParts<Arc<AppState>> for SessionHandle {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let claimed = parse_cookie(cookie_header, COOKIE_NAME)
            .and_then(|value| verify_session_id(value, &state.session_secret));

        let (id, session, created) = state.sessions.get_or_create(claimed, Instant::now()).await;

        Ok(SessionHandle {
            id,
            state: session,
            created,
            secret: state.session_secret.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn record_scenario_clears_previous_work() {
        let mut session = CaseSession::default();
        session.record_scenario("first".to_string());
        session
            .record_analysis("answer".to_string(), "critique".to_string())
            .unwrap();

        session.record_scenario("second".to_string());
        assert_eq!(session.scenario(), Some("second"));
        assert_eq!(session.user_solution(), None);
        assert_eq!(session.analysis_feedback(), None);
    }

    #[test]
    fn analysis_requires_a_scenario() {
        let mut session = CaseSession::default();
        assert_eq!(
            session.record_analysis("answer".to_string(), "critique".to_string()),
            Err(ValidationError::NoScenario)
        );
        assert_eq!(session.analysis_feedback(), None);
    }

    #[test]
    fn signed_id_roundtrips() {
        let id = SessionId::new();
        let value = sign_session_id(id, "secret");
        assert_eq!(verify_session_id(&value, "secret"), Some(id));
    }

    #[test]
    fn rejects_tampered_or_foreign_ids() {
        let id = SessionId::new();
        let value = sign_session_id(id, "secret");

        assert_eq!(verify_session_id(&value, "other-secret"), None);

        let forged = format!("{}|{}", SessionId::new(), value.split_once('|').unwrap().1);
        assert_eq!(verify_session_id(&forged, "secret"), None);

        assert_eq!(verify_session_id(&id.to_string(), "secret"), None);
        assert_eq!(verify_session_id("garbage|zz", "secret"), None);
    }

    #[test]
    fn cookie_is_http_only_session_cookie() {
        let cookie = session_cookie(SessionId::new(), "secret");
        assert!(cookie.starts_with("lh_session="));
        assert!(cookie.contains("; Path=/; HttpOnly; SameSite=Lax"));
        assert!(!cookie.contains("Max-Age"));
    }

    #[test]
    fn parse_cookie_works() {
        assert_eq!(
            parse_cookie("lh_session=abc123; other=xyz", "lh_session"),
            Some("abc123")
        );
        assert_eq!(
            parse_cookie("other=xyz; lh_session=abc123", "lh_session"),
            Some("abc123")
        );
        assert_eq!(parse_cookie("other=xyz", "lh_session"), None);
    }

    #[tokio::test]
    async fn store_creates_then_resumes() {
        let store = SessionStore::new(TTL);
        let now = Instant::now();

        let (id, state, created) = store.get_or_create(None, now).await;
        assert!(created);
        assert_eq!(state, CaseSession::default());

        store
            .update(id, |s| s.record_scenario("scenario".to_string()))
            .await;

        let (resumed, state, created) = store.get_or_create(Some(id), now).await;
        assert_eq!(resumed, id);
        assert!(!created);
        assert_eq!(state.scenario(), Some("scenario"));
    }

    #[tokio::test]
    async fn new_ids_take_no_space_until_written() {
        let store = SessionStore::new(TTL);
        let now = Instant::now();
        for _ in 0..50 {
            let (id, _, created) = store.get_or_create(None, now).await;
            assert!(created);
            store.get_or_create(Some(id), now).await;
        }
        assert!(store.is_empty().await);

        let (id, _, _) = store.get_or_create(None, now).await;
        store.update(id, |s| s.record_scenario("kept".to_string())).await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new(TTL);
        let now = Instant::now();
        let (a, _, _) = store.get_or_create(None, now).await;
        let (b, _, _) = store.get_or_create(None, now).await;
        assert_ne!(a, b);

        store.update(a, |s| s.record_scenario("only a".to_string())).await;
        store.update(b, |s| s.record_scenario("only b".to_string())).await;
        assert_eq!(
            store.snapshot(a).await.as_ref().and_then(|s| s.scenario().map(str::to_string)),
            Some("only a".to_string())
        );
        let (_, state_b, _) = store.get_or_create(Some(b), now).await;
        assert_eq!(state_b.scenario(), Some("only b"));
    }

    #[tokio::test]
    async fn expired_state_is_dropped() {
        let store = SessionStore::new(TTL);
        let (id, _, _) = store.get_or_create(None, Instant::now()).await;
        store.update(id, |s| s.record_scenario("stale".to_string())).await;

        let later = Instant::now() + TTL + Duration::from_secs(1);
        let (same, state, created) = store.get_or_create(Some(id), later).await;
        assert_eq!(same, id);
        assert!(!created);
        assert_eq!(state.scenario(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn prune_removes_idle_sessions() {
        let store = SessionStore::new(TTL);
        for _ in 0..2 {
            let (id, _, _) = store.get_or_create(None, Instant::now()).await;
            store.update(id, |s| s.record_scenario("idle".to_string())).await;
        }
        assert_eq!(store.len().await, 2);

        assert_eq!(store.prune_expired(Instant::now()).await, 0);
        let later = Instant::now() + TTL + Duration::from_secs(1);
        assert_eq!(store.prune_expired(later).await, 2);
        assert!(store.is_empty().await);
    }
}
