//! Database seeding utilities.

use std::io::Write;

use thiserror::Error;
use tracing::info;

use crate::config::ConfigError;
use crate::fixtures::{sample_trainer, sample_user_ext};
use trainu::database::{TableStore, insert_row};
use trainu::errors::AppError;
use trainu::models::{Row, Trainer, UserExt};

/// Line written to stdout once both rows are in.
pub const COMPLETION_MESSAGE: &str = "Seed complete.";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Configuration error")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] AppError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Inserts the sample rows through a table store.
pub struct Seeder<S> {
    store: S,
}

impl<S: TableStore> Seeder<S> {
    /// Creates a new seeder writing through `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Seeds the extended user record.
    pub async fn seed_user_ext(&self, user: &UserExt) -> Result<(), SeedError> {
        info!(
            "Seeding {} row for {} {}...",
            UserExt::TABLE,
            user.role.as_str(),
            user.user_id
        );
        insert_row(&self.store, user).await?;
        Ok(())
    }

    /// Seeds a trainer profile.
    pub async fn seed_trainer(&self, trainer: &Trainer) -> Result<(), SeedError> {
        info!("Seeding {} row '{}'...", Trainer::TABLE, trainer.slug);
        insert_row(&self.store, trainer).await?;
        Ok(())
    }

    /// Inserts the sample user record, then the sample trainer, then writes
    /// [`COMPLETION_MESSAGE`] to `out`.
    ///
    /// Stops at the first failed insert. Rows are inserted as-is on every run,
    /// so repeating a run against the same project hits whatever unique
    /// constraints the schema has.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), SeedError> {
        self.seed_user_ext(&sample_user_ext()).await?;
        self.seed_trainer(&sample_trainer()).await?;

        writeln!(out, "{COMPLETION_MESSAGE}")?;
        out.flush()?;
        Ok(())
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use trainu::errors::ErrorDetail;

    /// Records every insert; optionally rejects inserts into one table.
    #[derive(Default)]
    struct RecordingStore {
        inserts: Mutex<Vec<(String, Value)>>,
        reject_table: Option<&'static str>,
    }

    impl RecordingStore {
        fn rejecting(table: &'static str) -> Self {
            Self {
                reject_table: Some(table),
                ..Default::default()
            }
        }

        fn inserts(&self) -> Vec<(String, Value)> {
            self.inserts.lock().unwrap().clone()
        }

        fn tables(&self) -> Vec<String> {
            self.inserts().into_iter().map(|(t, _)| t).collect()
        }
    }

    #[async_trait]
    impl TableStore for RecordingStore {
        async fn insert(&self, table: &str, row: Value) -> Result<(), AppError> {
            self.inserts.lock().unwrap().push((table.to_string(), row));
            if self.reject_table == Some(table) {
                return Err(AppError::Rejected {
                    table: table.to_string(),
                    status: StatusCode::CONFLICT,
                    detail: ErrorDetail::Raw("duplicate".to_string()),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_config_error_detail_lives_in_source() {
        use std::error::Error as _;

        let err = SeedError::from(ConfigError::MissingVar("SUPABASE_SERVICE_ROLE_KEY"));
        assert_eq!(err.to_string(), "Configuration error");
        assert_eq!(
            err.source().map(|e| e.to_string()),
            Some("Missing required environment variable SUPABASE_SERVICE_ROLE_KEY".to_string())
        );
    }

    #[tokio::test]
    async fn test_run_inserts_user_then_trainer() {
        let seeder = Seeder::new(RecordingStore::default());
        let mut out = Vec::new();

        seeder.run(&mut out).await.unwrap();

        let inserts = seeder.store().inserts();
        assert_eq!(inserts.len(), 2);
        assert_eq!(inserts[0].0, "users_ext");
        assert_eq!(inserts[0].1["role"], json!("trainer"));
        assert_eq!(inserts[0].1["ghl_contact_id"], json!("sample-contact-1"));
        assert_eq!(inserts[1].0, "trainers");
        assert_eq!(inserts[1].1["slug"], json!("alex-strong"));
        assert_eq!(inserts[1].1["specialties"], json!(["powerlifting", "youth"]));
        assert_eq!(String::from_utf8(out).unwrap(), "Seed complete.\n");
    }

    #[tokio::test]
    async fn test_first_failure_skips_trainer() {
        let seeder = Seeder::new(RecordingStore::rejecting("users_ext"));
        let mut out = Vec::new();

        let err = seeder.run(&mut out).await.unwrap_err();

        assert!(matches!(err, SeedError::Database(AppError::Rejected { .. })));
        assert_eq!(seeder.store().tables(), vec!["users_ext"]);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_second_failure_prints_nothing() {
        let seeder = Seeder::new(RecordingStore::rejecting("trainers"));
        let mut out = Vec::new();

        assert!(seeder.run(&mut out).await.is_err());
        assert_eq!(seeder.store().tables(), vec!["users_ext", "trainers"]);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_rerun_repeats_same_payloads() {
        let seeder = Seeder::new(RecordingStore::default());
        let mut out = Vec::new();

        seeder.run(&mut out).await.unwrap();
        seeder.run(&mut out).await.unwrap();

        let inserts = seeder.store().inserts();
        assert_eq!(inserts.len(), 4);
        assert_eq!(inserts[0], inserts[2]);
        assert_eq!(inserts[1], inserts[3]);
    }
}
