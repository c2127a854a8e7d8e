//! Use case for fetching the action collection

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn, Instrument};
use vt_core::ports::ActionsFetchPort;
use vt_core::ActionRecord;

/// Fetches the full candidate collection once.
///
/// ## Behavior
/// - Delegates to the fetch port; no retries here
/// - The returned collection is treated as an immutable snapshot by callers
pub struct LoadActions {
    fetch: Arc<dyn ActionsFetchPort>,
}

impl LoadActions {
    pub fn new(fetch: Arc<dyn ActionsFetchPort>) -> Self {
        Self { fetch }
    }

    pub async fn execute(&self) -> Result<Vec<ActionRecord>> {
        let span = info_span!("usecase.load_actions.execute");

        async {
            let records = self
                .fetch
                .fetch_all()
                .await
                .inspect_err(|e| warn!(error = %e, "Failed to fetch actions"))
                .context("Failed to fetch actions")?;

            info!(count = records.len(), "Actions fetched");
            Ok(records)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use vt_core::ports::FetchError;

    mockall::mock! {
        Fetch {}

        #[async_trait]
        impl ActionsFetchPort for Fetch {
            async fn fetch_all(&self) -> Result<Vec<ActionRecord>, FetchError>;
        }
    }

    #[tokio::test]
    async fn test_execute_returns_records() {
        let record = ActionRecord {
            title: "Mutirão".into(),
            ..ActionRecord::default()
        };
        let expected = vec![record.clone()];

        let mut port = MockFetch::new();
        port.expect_fetch_all()
            .times(1)
            .returning(move || Ok(vec![record.clone()]));
        let uc = LoadActions::new(Arc::new(port));

        assert_eq!(uc.execute().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_execute_wraps_port_error() {
        let mut port = MockFetch::new();
        port.expect_fetch_all()
            .returning(|| Err(FetchError::Network("connection refused".into())));
        let uc = LoadActions::new(Arc::new(port));

        let err = uc.execute().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch actions");
        assert!(format!("{err:#}").contains("connection refused"));
    }
}
