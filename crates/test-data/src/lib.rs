//! Development seed data for TrainU.
//!
//! Inserts one sample trainer, plus the extended user record it hangs off,
//! into a Supabase project through its REST gateway.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let config = SupabaseConfig::from_env()?;
//! let db = Database::new(&config.url, config.service_role_key.clone());
//!
//! Seeder::new(db).run(&mut std::io::stdout()).await?;
//! ```
//!
//! [`seed`] does the same, reading the settings through a lookup function.

pub mod config;
pub mod db;
pub mod fixtures;

use std::io::Write;

use tracing::info;

use crate::config::SupabaseConfig;
use crate::db::{SeedError, Seeder};

// Re-export core types from trainu crate
pub use trainu::database::{Database, TableStore};
pub use trainu::models::{Trainer, UserExt, UserRole};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SupabaseConfig};
    pub use crate::db::{COMPLETION_MESSAGE, SeedError, Seeder};
    pub use crate::fixtures::{SAMPLE_USER_ID, sample_trainer, sample_user_ext};
    pub use crate::{Database, TableStore, Trainer, UserExt, UserRole, seed};
}

/// Seeds the project described by `lookup` and writes the completion line to
/// `out`.
///
/// Configuration is resolved before any request is made, so a missing
/// variable fails without touching the network.
pub async fn seed<F, W>(lookup: F, out: &mut W) -> Result<(), SeedError>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let config = SupabaseConfig::from_lookup(lookup)?;
    info!("Seeding Supabase project at {}", config.url);

    let db = Database::new(&config.url, config.service_role_key);
    Seeder::new(db).run(out).await
}
