//! Cadence recommends how to communicate an upcoming decision: hold a
//! meeting, send an email, post an async message, cancel a meeting that is
//! not needed, or do nothing at all.
//!
//! [`scoring::score`] is a pure function from [`questionnaire::QuestionnaireAnswers`]
//! to [`scoring::RecommendationResult`]. The CLI and REST server are thin
//! layers over it.

pub mod config;
pub mod output;
pub mod questionnaire;
pub mod scoring;
pub mod server;
pub mod telemetry;

pub use questionnaire::QuestionnaireAnswers;
pub use scoring::{score, RecommendationResult};
