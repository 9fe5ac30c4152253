use {crate::client::ClientError, bon::Builder, url::Url};

pub const DEFAULT_ENDPOINT: &str = "/summarize";

/// Where the form sends articles.
///
/// `endpoint` is resolved against `base_url` when set, otherwise against the
/// URL of the page hosting the form.
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
	#[builder(default = DEFAULT_ENDPOINT.to_owned(), into)]
	pub endpoint: String,
	pub base_url: Option<Url>,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl FormConfig {
	pub fn resolve_endpoint(&self) -> Result<Url, ClientError> {
		let base = match &self.base_url {
			Some(base) => base.clone(),
			None => page_url()?,
		};
		Ok(base.join(&self.endpoint)?)
	}
}

#[cfg(target_arch = "wasm32")]
fn page_url() -> Result<Url, ClientError> {
	let href = web_sys::window().and_then(|window| window.location().href().ok()).ok_or(ClientError::NoPageOrigin)?;
	Ok(Url::parse(&href)?)
}

#[cfg(not(target_arch = "wasm32"))]
fn page_url() -> Result<Url, ClientError> {
	Err(ClientError::NoPageOrigin)
}
