use {
	crate::config::FormConfig,
	async_trait::async_trait,
	common::{SummarizeRequest, SummarizeResponse},
	reqwest::{Client, StatusCode},
	thiserror::Error,
};

/// Why a request to the summarization API failed. Logged, never shown.
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("could not determine the page URL to resolve the endpoint against")]
	NoPageOrigin,
	#[error("invalid endpoint: {0}")]
	Endpoint(#[from] url::ParseError),
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("server answered with status {0}")]
	Status(StatusCode),
	#[error("response body is not a summary: {0}")]
	Decode(#[source] reqwest::Error),
}

/// The one network call the form makes.
#[async_trait(?Send)]
pub trait SummaryBoundary {
	async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, ClientError>;
}

#[derive(Clone, Debug)]
pub struct HttpSummaryClient {
	http: Client,
	config: FormConfig,
}

impl HttpSummaryClient {
	pub fn new(config: FormConfig) -> Self {
		Self { http: Client::new(), config }
	}
}

#[async_trait(?Send)]
impl SummaryBoundary for HttpSummaryClient {
	async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, ClientError> {
		let url = self.config.resolve_endpoint()?;
		let res = self.http.post(url).json(request).send().await?;

		let status = res.status();
		if !status.is_success() {
			return Err(ClientError::Status(status));
		}

		res.json::<SummarizeResponse>().await.map_err(ClientError::Decode)
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		crate::{FormState, SubmitOutcome, submit},
		axum::{
			Json, Router,
			http::{HeaderMap, header},
			routing::post,
		},
		serde_json::{Value, json},
		std::cell::RefCell,
		url::Url,
	};

	async fn serve(router: Router) -> Url {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
		Url::parse(&format!("http://{addr}")).unwrap()
	}

	fn client(base_url: Url) -> HttpSummaryClient {
		HttpSummaryClient::new(FormConfig::builder().base_url(base_url).build())
	}

	fn request(text: &str) -> SummarizeRequest {
		SummarizeRequest { article_text: text.to_owned() }
	}

	#[tokio::test]
	async fn posts_json_article_text() {
		async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
			let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
			Json(json!({ "summary": format!("{content_type}|{}", body["articleText"].as_str().unwrap_or("<missing>")) }))
		}
		let base = serve(Router::new().route("/summarize", post(echo))).await;

		let res = client(base).summarize(&request("  Some article.\n")).await.unwrap();
		assert_eq!(res.into_summary(), "application/json|  Some article.\n");
	}

	#[tokio::test]
	async fn missing_summary_is_not_an_error() {
		let base = serve(Router::new().route("/summarize", post(|| async { Json(json!({ "model": "llama3" })) }))).await;
		let res = client(base).summarize(&request("Some article.")).await.unwrap();
		assert_eq!(res.summary, None);
	}

	#[tokio::test]
	async fn non_success_status_is_an_error() {
		let base = serve(Router::new().route("/summarize", post(|| async { (axum::http::StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "summary": "ignored" }))) }))).await;
		let err = client(base).summarize(&request("Some article.")).await.unwrap_err();
		assert!(matches!(err, ClientError::Status(status) if status == StatusCode::SERVICE_UNAVAILABLE));
	}

	#[tokio::test]
	async fn malformed_body_is_an_error() {
		let base = serve(Router::new().route("/summarize", post(|| async { "<html>not json</html>" }))).await;
		let err = client(base).summarize(&request("Some article.")).await.unwrap_err();
		assert!(matches!(err, ClientError::Decode(_)));
	}

	#[tokio::test]
	async fn unreachable_server_is_an_error() {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let err = client(Url::parse(&format!("http://{addr}")).unwrap()).summarize(&request("Some article.")).await.unwrap_err();
		assert!(matches!(err, ClientError::Transport(_)));
	}

	#[tokio::test]
	async fn form_shows_summary_from_server() {
		let base = serve(Router::new().route("/summarize", post(|| async { Json(json!({ "summary": "Short summary." })) }))).await;
		let store = RefCell::new(FormState::with_article("Some article."));

		assert_eq!(submit(&store, &client(base)).await, SubmitOutcome::Summarized);
		let state = store.borrow();
		assert_eq!(state.summary(), "Short summary.");
		assert_eq!(state.error(), "");
		assert!(!state.is_loading());
	}

	#[tokio::test]
	async fn form_shows_failure_for_unavailable_server() {
		let base = serve(Router::new().route("/summarize", post(|| async { axum::http::StatusCode::SERVICE_UNAVAILABLE }))).await;
		let store = RefCell::new(FormState::with_article("Some article."));

		assert_eq!(submit(&store, &client(base)).await, SubmitOutcome::Failed);
		let state = store.borrow();
		assert_eq!(state.error(), "Failed to fetch summary. Make sure the API is running.");
		assert_eq!(state.summary(), "");
		assert!(!state.is_loading());
	}
}
