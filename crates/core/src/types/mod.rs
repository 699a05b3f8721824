//! Core types for FrameFit.
//!
//! Type-safe wrappers and enums for the funnel's domain concepts.

pub mod catalog;
pub mod email;
pub mod face_shape;
pub mod image;
pub mod price;
pub mod questionnaire;
pub mod records;
pub mod tier;

pub use catalog::{FrameModel, OpticsListing, RecommendationItem};
pub use email::{Email, EmailError};
pub use face_shape::FaceShape;
pub use image::{ImageError, ImagePayload};
pub use price::{CurrencyCode, Price};
pub use questionnaire::{
    BudgetRange, FrameStyle, GlassesType, QuestionnaireAnswers, SkinTone, UsageActivity,
};
pub use records::{FacialAnalysis, TryOnRender, UserSession};
pub use tier::{Plan, Tier};
