//! A form that sends pasted news articles to a summarization API and shows
//! the returned summary.
//!
//! The [`NewsSummary`] component owns one [`FormState`]. Everything it does on
//! submit lives in [`submit`], which works against any [`FormStore`] and any
//! [`SummaryBoundary`], so the flow runs the same under Dioxus signals and in
//! plain tests.

mod client;
mod component;
mod config;
mod state;
mod submit;

pub use client::{ClientError, HttpSummaryClient, SummaryBoundary};
pub use component::NewsSummary;
pub use config::{DEFAULT_ENDPOINT, FormConfig};
pub use state::{FormState, FormStore};
pub use submit::{SubmitOutcome, submit};
