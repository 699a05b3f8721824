//! Funnel-stage prerequisite extractors.
//!
//! Later funnel pages depend on records written by earlier ones. These
//! extractors reject with a redirect to the EARLIEST missing prerequisite:
//! a visitor with no questionnaire goes to the questionnaire even when
//! they asked for the results page.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use framefit_core::{FacialAnalysis, QuestionnaireAnswers};

use crate::session;

/// Rejection for the funnel-stage extractors.
pub enum FunnelRejection {
    /// Redirect to the named earlier funnel stage.
    Redirect(&'static str),
    /// The session layer is missing from the request.
    NoSession,
}

impl IntoResponse for FunnelRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(target) => Redirect::to(target).into_response(),
            Self::NoSession => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Extractor that requires committed questionnaire answers.
pub struct RequireQuestionnaire(pub QuestionnaireAnswers);

impl<S> FromRequestParts<S> for RequireQuestionnaire
where
    S: Send + Sync,
{
    type Rejection = FunnelRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let sess = parts
            .extensions
            .get::<Session>()
            .ok_or(FunnelRejection::NoSession)?;

        let answers = session::get_questionnaire(sess)
            .await
            .ok_or(FunnelRejection::Redirect("/questionnaire"))?;

        Ok(Self(answers))
    }
}

/// Extractor that requires a facial-analysis record.
///
/// With no analysis the visitor goes to capture if the questionnaire is
/// done, otherwise all the way back to the questionnaire.
pub struct RequireAnalysis(pub FacialAnalysis);

impl<S> FromRequestParts<S> for RequireAnalysis
where
    S: Send + Sync,
{
    type Rejection = FunnelRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let sess = parts
            .extensions
            .get::<Session>()
            .ok_or(FunnelRejection::NoSession)?;

        if let Some(analysis) = session::get_analysis(sess).await {
            return Ok(Self(analysis));
        }

        let target = if session::get_questionnaire(sess).await.is_some() {
            "/capture"
        } else {
            "/questionnaire"
        };
        Err(FunnelRejection::Redirect(target))
    }
}
