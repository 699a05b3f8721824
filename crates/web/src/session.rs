//! The session record store.
//!
//! Three singleton records live under distinct keys in the visitor's
//! session: the user record, the committed questionnaire answers, and the
//! facial-analysis result. Two transient keys carry the in-progress wizard
//! draft and the latest try-on render.
//!
//! Contract: `get` returns a detached copy or absent; `set` overwrites
//! atomically (it either fully succeeds or the prior value is retained);
//! reads never panic and swallow backend errors into absence. Sessions are
//! backed by an in-process memory store, the server-side analogue of the
//! browser-local storage this funnel was designed around: state is scoped
//! to one visitor and one process. Concurrent tabs sharing a cookie see
//! stale reads until their next request; that gap is a known limitation,
//! deliberately not papered over with cross-tab sync machinery.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use framefit_core::{FacialAnalysis, QuestionnaireAnswers, TryOnRender, UserSession};

use crate::config::FunnelConfig;
use crate::services::wizard::Wizard;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "ff_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Keys for the persisted records.
pub mod keys {
    /// The user identity/entitlement record.
    pub const USER: &str = "user";

    /// The committed questionnaire answers.
    pub const QUESTIONNAIRE: &str = "questionnaire";

    /// The facial-analysis result.
    pub const ANALYSIS: &str = "analysis";

    /// Transient wizard draft (answers accumulated across steps).
    pub const WIZARD: &str = "wizard";

    /// Latest try-on render, replaced wholesale per generation.
    pub const TRYON_RENDER: &str = "tryon_render";
}

/// Create the session layer backed by the in-memory store.
#[must_use]
pub fn create_session_layer(config: &FunnelConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

// =============================================================================
// Generic record access
// =============================================================================

/// Read a record, returning a detached copy or absent.
///
/// Backend errors are treated as absence; reads never fail outward.
async fn get_record<T: DeserializeOwned>(session: &Session, key: &str) -> Option<T> {
    session.get::<T>(key).await.ok().flatten()
}

/// Overwrite a record atomically.
async fn set_record<T: Serialize>(
    session: &Session,
    key: &str,
    value: &T,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(key, value).await
}

/// Remove a record; absence of the record is not an error.
async fn clear_record(session: &Session, key: &str) -> Result<(), tower_sessions::session::Error> {
    session.remove_value(key).await.map(|_| ())
}

// =============================================================================
// Typed accessors
// =============================================================================

/// Get the current user record.
pub async fn get_user(session: &Session) -> Option<UserSession> {
    get_record(session, keys::USER).await
}

/// Overwrite the user record.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_user(
    session: &Session,
    user: &UserSession,
) -> Result<(), tower_sessions::session::Error> {
    set_record(session, keys::USER, user).await
}

/// Get the committed questionnaire answers.
pub async fn get_questionnaire(session: &Session) -> Option<QuestionnaireAnswers> {
    get_record(session, keys::QUESTIONNAIRE).await
}

/// Overwrite the questionnaire answers (wholesale, on wizard commit).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_questionnaire(
    session: &Session,
    answers: &QuestionnaireAnswers,
) -> Result<(), tower_sessions::session::Error> {
    set_record(session, keys::QUESTIONNAIRE, answers).await
}

/// Get the facial-analysis record.
pub async fn get_analysis(session: &Session) -> Option<FacialAnalysis> {
    get_record(session, keys::ANALYSIS).await
}

/// Overwrite the facial-analysis record (on each new analysis run).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_analysis(
    session: &Session,
    analysis: &FacialAnalysis,
) -> Result<(), tower_sessions::session::Error> {
    set_record(session, keys::ANALYSIS, analysis).await
}

/// Get the in-progress wizard draft.
pub async fn get_wizard(session: &Session) -> Option<Wizard> {
    get_record(session, keys::WIZARD).await
}

/// Store the wizard draft between requests.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_wizard(
    session: &Session,
    wizard: &Wizard,
) -> Result<(), tower_sessions::session::Error> {
    set_record(session, keys::WIZARD, wizard).await
}

/// Discard the wizard draft (after commit).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_wizard(session: &Session) -> Result<(), tower_sessions::session::Error> {
    clear_record(session, keys::WIZARD).await
}

/// Get the latest try-on render.
pub async fn get_render(session: &Session) -> Option<TryOnRender> {
    get_record(session, keys::TRYON_RENDER).await
}

/// Replace the stored try-on render wholesale.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_render(
    session: &Session,
    render: &TryOnRender,
) -> Result<(), tower_sessions::session::Error> {
    set_record(session, keys::TRYON_RENDER, render).await
}

/// Explicit full reset: destroys every record in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be flushed.
pub async fn reset(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use framefit_core::{Email, Plan, UserSession};

    use super::*;

    fn fresh_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_absent_records_read_as_none() {
        let session = fresh_session();
        assert!(get_user(&session).await.is_none());
        assert!(get_questionnaire(&session).await.is_none());
        assert!(get_analysis(&session).await.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_returns_detached_copy() {
        let session = fresh_session();
        let user = UserSession::free(Email::parse("a@b.c").unwrap());
        set_user(&session, &user).await.unwrap();

        let mut copy = get_user(&session).await.unwrap();
        assert_eq!(copy, user);

        // Mutating the copy must not affect the stored record.
        copy.upgrade(Plan::Monthly);
        assert_eq!(get_user(&session).await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let session = fresh_session();
        let first = UserSession::free(Email::parse("first@example.com").unwrap());
        let second = UserSession::free(Email::parse("second@example.com").unwrap());

        set_user(&session, &first).await.unwrap();
        set_user(&session, &second).await.unwrap();

        assert_eq!(
            get_user(&session).await.unwrap().email.as_str(),
            "second@example.com"
        );
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let session = fresh_session();
        let user = UserSession::free(Email::parse("a@b.c").unwrap());
        set_user(&session, &user).await.unwrap();

        reset(&session).await.unwrap();
        assert!(get_user(&session).await.is_none());
    }

    #[tokio::test]
    async fn test_clear_absent_record_is_a_no_op() {
        let session = fresh_session();
        assert!(clear_wizard(&session).await.is_ok());
    }
}
