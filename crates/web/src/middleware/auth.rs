//! Identity and entitlement extractors.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use framefit_core::UserSession;

use crate::session;

/// Rejection for the identity extractors.
pub enum AuthRejection {
    /// User lacks the premium entitlement (or does not exist); send them
    /// to the upgrade page.
    RedirectToUpgrade,
    /// The session layer is missing from the request.
    NoSession,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToUpgrade => Redirect::to("/upgrade").into_response(),
            Self::NoSession => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Extractor that optionally reads the current user.
///
/// Never rejects; yields `None` for anonymous visitors.
pub struct OptionalUser(pub Option<UserSession>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(sess) => session::get_user(sess).await,
            None => None,
        };

        Ok(Self(user))
    }
}

/// Extractor that requires the premium entitlement.
///
/// An anonymous visitor and a free-tier user are both bounced to the
/// upgrade page; only the unauthenticated case goes to login via the
/// upgrade flow itself.
pub struct RequirePremium(pub UserSession);

impl<S> FromRequestParts<S> for RequirePremium
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let sess = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::NoSession)?;

        let user = session::get_user(sess)
            .await
            .ok_or(AuthRejection::RedirectToUpgrade)?;

        if !user.is_premium() {
            return Err(AuthRejection::RedirectToUpgrade);
        }

        Ok(Self(user))
    }
}
