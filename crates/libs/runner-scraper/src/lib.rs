//! Artifact upload for the test executors.
//!
//! A [`Scraper`] takes local directories produced by a test run and uploads
//! their contents to remote storage, tagged with the execution id.
//! [`ObjectStoreScraper`] talks to any S3 compatible store (AWS, MinIO, ...).
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use runner_scraper::{ObjectStoreScraper, Scraper, StoreParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scraper = ObjectStoreScraper::new(&StoreParams {
//!         endpoint: "minio:9000".into(),
//!         access_key_id: "minio".into(),
//!         secret_access_key: "minio123".into(),
//!         location: "us-east-1".into(),
//!         token: String::new(),
//!         ssl: false,
//!         bucket: "test-artifacts".into(),
//!     })?;
//!
//!     scraper
//!         .scrape("exec-1", &[PathBuf::from("/data/repo/e2e/playwright-report-zip")])
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod object_store_scraper;
pub mod prelude;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::prelude::*;

pub use error::Error;
pub use object_store_scraper::{ObjectStoreScraper, StoreParams};

/// Uploads local artifact directories to remote storage.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Upload every file below each of `directories`, tagged by `execution_id`.
    async fn scrape(&self, execution_id: &str, directories: &[PathBuf]) -> Result<()>;
}
