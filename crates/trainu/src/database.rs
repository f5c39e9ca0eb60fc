//! Table access through the Supabase REST gateway.
//!
//! [`TableStore`] is the seam callers write against; [`Database`] is the
//! PostgREST-backed implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::{AppError, ErrorDetail};
use crate::models::Row;

/// Insert-only access to named tables.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Inserts a single JSON row into `table`.
    async fn insert(&self, table: &str, row: Value) -> Result<(), AppError>;
}

/// Serializes `row` and inserts it into its table.
pub async fn insert_row<R, S>(store: &S, row: &R) -> Result<(), AppError>
where
    R: Row + Sync,
    S: TableStore + ?Sized,
{
    let value = serde_json::to_value(row)?;
    store.insert(R::TABLE, value).await
}

/// PostgREST client authenticated with a single API key.
///
/// The key is sent both as `apikey` (read by the gateway) and as the bearer
/// token (read by Postgres for role selection), which is how Supabase expects
/// service-role requests.
#[derive(Clone)]
pub struct Database {
    client: Client,
    rest_url: String,
    api_key: String,
}

impl Database {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    pub fn with_client(client: Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }
}

#[async_trait]
impl TableStore for Database {
    async fn insert(&self, table: &str, row: Value) -> Result<(), AppError> {
        let url = self.table_url(table);

        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Rejected {
                table: table.to_string(),
                status,
                detail: ErrorDetail::from_body(&body),
            });
        }

        // The representation is only used for logging; a body we can't read
        // doesn't undo an insert the server already acknowledged.
        match resp.json::<Vec<Value>>().await {
            Ok(rows) => debug!("Inserted {} row(s) into {table}", rows.len()),
            Err(e) => debug!("Inserted into {table} ({status}), unreadable body: {e}"),
        }

        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("rest_url", &self.rest_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
