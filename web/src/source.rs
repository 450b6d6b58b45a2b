use gloo::net::http::{Request, Response};
use jeopardy_core::{CategoryDetail, CategoryId, CategorySummary, GameError, Result, TriviaSource};
use jeopardy_protocol as protocol;

/// [`TriviaSource`] backed by the trivia service's HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaSource {
    base_url: String,
}

impl HttpTriviaSource {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| GameError::Network(err.to_string()))?;
        Self::body_of(url, response).await
    }

    async fn body_of(url: &str, response: Response) -> Result<String> {
        if !response.ok() {
            return Err(GameError::Network(format!(
                "{} {} from {}",
                response.status(),
                response.status_text(),
                url
            )));
        }
        response
            .text()
            .await
            .map_err(|err| GameError::Network(err.to_string()))
    }
}

impl TriviaSource for HttpTriviaSource {
    async fn list_categories(&self, count: u16) -> Result<Vec<CategorySummary>> {
        let body = self.get(&protocol::categories_url(&self.base_url, count)).await?;
        protocol::decode_category_list(&body)
    }

    async fn category_detail(&self, id: CategoryId) -> Result<CategoryDetail> {
        let body = self.get(&protocol::category_url(&self.base_url, id)).await?;
        protocol::decode_category_detail(&body)
    }
}
