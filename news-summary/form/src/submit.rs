use {
	crate::{
		client::SummaryBoundary,
		state::{FormState, FormStore},
	},
	common::{AppError, SummarizeResponse},
	dioxus::logger::tracing::{debug, info, warn},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The article was empty; nothing was sent.
	Rejected,
	Summarized,
	Failed,
	/// A newer submission started before this one finished.
	Superseded,
	/// The view owning the state went away.
	Detached,
}

/// Clears `loading` for its generation when dropped, whichever way the
/// submission ends.
struct LoadingGuard<'a, S: FormStore> {
	store: &'a S,
	generation: u64,
}

impl<S: FormStore> Drop for LoadingGuard<'_, S> {
	fn drop(&mut self) {
		let generation = self.generation;
		self.store.update(|state| state.end_loading(generation));
	}
}

/// Validates the article in `store`, sends it through `boundary` and records
/// the summary or a failure message.
pub async fn submit<S, B>(store: &S, boundary: &B) -> SubmitOutcome
where
	S: FormStore,
	B: SummaryBoundary + ?Sized,
{
	let submission = match store.update(FormState::begin_submit) {
		Some(Ok(submission)) => submission,
		Some(Err(err)) => {
			debug!("submission rejected: {err}");
			return SubmitOutcome::Rejected;
		},
		None => return SubmitOutcome::Detached,
	};
	let generation = submission.generation;
	let _loading = LoadingGuard { store, generation };

	debug!(generation, chars = submission.request.article_text.chars().count(), "requesting summary");
	let outcome = boundary.summarize(&submission.request).await.map(SummarizeResponse::into_summary).map_err(|err| {
		warn!(generation, "summary request failed: {err}");
		AppError::RequestFailed
	});
	let succeeded = outcome.is_ok();

	match store.update(|state| state.settle(generation, outcome)) {
		Some(true) if succeeded => {
			info!(generation, "summary received");
			SubmitOutcome::Summarized
		},
		Some(true) => SubmitOutcome::Failed,
		Some(false) => {
			debug!(generation, "discarding response for superseded submission");
			SubmitOutcome::Superseded
		},
		None => SubmitOutcome::Detached,
	}
}
