use async_trait::async_trait;
use tracing::info;
use vt_core::ports::{ActionsFetchPort, FetchError};
use vt_core::ActionRecord;

use super::client::ApiClient;
use super::dto::ActionDto;

const ACTIONS_PATH: &str = "actions";

/// `GET {base}/actions`, returning every action in backend order.
pub struct HttpActionsRepository {
    client: ApiClient,
}

impl HttpActionsRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ActionsFetchPort for HttpActionsRepository {
    async fn fetch_all(&self) -> Result<Vec<ActionRecord>, FetchError> {
        let dtos: Vec<ActionDto> = self.client.get_json(ACTIONS_PATH).await?;
        info!(count = dtos.len(), "Fetched actions from backend");
        Ok(dtos.into_iter().map(ActionRecord::from).collect())
    }
}
