use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors shown to the user. Both variants render as fixed text; the cause of a
/// failed request is logged, never displayed.
#[derive(Serialize, Deserialize, Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
	#[error("Please paste a news article to summarize.")]
	EmptyArticle,
	#[error("Failed to fetch summary. Make sure the API is running.")]
	RequestFailed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
	#[serde(rename = "articleText")]
	pub article_text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizeResponse {
	#[serde(default)]
	pub summary: Option<String>,
}

impl SummarizeResponse {
	/// The summary text, empty when the server left the field out or sent `null`.
	pub fn into_summary(self) -> String {
		self.summary.unwrap_or_default()
	}
}
