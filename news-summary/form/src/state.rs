use {
	common::{AppError, SummarizeRequest},
	dioxus::{logger::tracing::debug, prelude::*},
	std::cell::RefCell,
};

/// Everything the form shows, owned by one view instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
	article_text: String,
	summary: String,
	loading: bool,
	error: String,
	generation: u64,
}

/// An accepted submission: the request to send and the generation it belongs to.
#[derive(Debug)]
pub(crate) struct Submission {
	pub generation: u64,
	pub request: SummarizeRequest,
}

impl FormState {
	pub fn with_article(article_text: impl Into<String>) -> Self {
		Self { article_text: article_text.into(), ..Self::default() }
	}

	pub fn article_text(&self) -> &str {
		&self.article_text
	}

	pub fn summary(&self) -> &str {
		&self.summary
	}

	pub fn error(&self) -> &str {
		&self.error
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn set_article_text(&mut self, article_text: impl Into<String>) {
		self.article_text = article_text.into();
	}

	pub fn submit_label(&self) -> &'static str {
		if self.loading { "Summarizing..." } else { "Summarize" }
	}

	pub fn shows_error(&self) -> bool {
		!self.error.is_empty()
	}

	pub fn shows_summary(&self) -> bool {
		!self.summary.is_empty()
	}

	/// Starts a new submission. Every call supersedes whatever was in flight.
	pub(crate) fn begin_submit(&mut self) -> Result<Submission, AppError> {
		self.error.clear();
		self.summary.clear();
		self.generation = self.generation.wrapping_add(1);

		if is_blank(&self.article_text) {
			self.loading = false;
			self.error = AppError::EmptyArticle.to_string();
			return Err(AppError::EmptyArticle);
		}

		self.loading = true;
		Ok(Submission { generation: self.generation, request: SummarizeRequest { article_text: self.article_text.clone() } })
	}

	/// Records the result of `generation`. Returns `false` and leaves the
	/// state alone when a newer submission has started since.
	pub(crate) fn settle(&mut self, generation: u64, outcome: Result<String, AppError>) -> bool {
		if generation != self.generation {
			return false;
		}
		match outcome {
			Ok(summary) => self.summary = summary,
			Err(err) => self.error = err.to_string(),
		}
		true
	}

	pub(crate) fn end_loading(&mut self, generation: u64) {
		if generation == self.generation {
			self.loading = false;
		}
	}
}

/// Whitespace as JavaScript's `String.prototype.trim` sees it: Unicode
/// white space plus the BOM, minus NEL.
fn is_blank(text: &str) -> bool {
	text.chars().all(|c| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Shared handle to a [`FormState`].
pub trait FormStore {
	/// Applies `f` to the state. Returns `None` once the owning view is gone.
	fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormStore for Signal<FormState> {
	fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
		let mut signal = *self;
		match signal.try_write() {
			Ok(mut state) => Some(f(&mut state)),
			Err(err) => {
				debug!("form state no longer writable: {err}");
				None
			},
		}
	}
}

impl FormStore for RefCell<FormState> {
	fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
		Some(f(&mut self.borrow_mut()))
	}
}
