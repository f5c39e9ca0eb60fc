//! Development seed script - inserts a sample trainer
//!
//! Requires `NEXT_PUBLIC_SUPABASE_URL` and `SUPABASE_SERVICE_ROLE_KEY`.
//! The sample auth user (`00000000-0000-0000-0000-000000000001`) must already
//! exist in the project.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for the completion line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    test_data::seed(|name| std::env::var(name).ok(), &mut std::io::stdout().lock()).await?;

    Ok(())
}
