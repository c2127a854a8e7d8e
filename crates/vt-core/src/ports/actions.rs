use async_trait::async_trait;

use crate::actions::ActionRecord;

use super::errors::FetchError;

#[async_trait]
pub trait ActionsFetchPort: Send + Sync {
    /// Full candidate collection. Filtering happens client-side.
    async fn fetch_all(&self) -> Result<Vec<ActionRecord>, FetchError>;
}
