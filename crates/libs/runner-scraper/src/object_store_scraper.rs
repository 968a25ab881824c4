//! Object store implementation of [`Scraper`].

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use futures::TryStreamExt;
use object_store::{
    ObjectMeta, ObjectStore, PutPayload, aws::AmazonS3Builder, local::LocalFileSystem, path::Path,
};
use tracing::{debug, info};

use crate::Scraper;
use crate::prelude::*;

/// Connection settings for the artifact store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreParams {
    /// `host:port` or full URL of the store.
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Region, left to the store default when empty.
    pub location: String,
    /// Session token, unused when empty.
    pub token: String,
    /// Use TLS when the endpoint carries no scheme.
    pub ssl: bool,
    /// Bucket artifacts are written to.
    pub bucket: String,
}

impl StoreParams {
    /// Endpoint URL including its scheme.
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.contains("://") {
            return self.endpoint.clone();
        }
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{scheme}://{}", self.endpoint)
    }
}

/// Scraper backed by `object_store`.
///
/// Each file is written to `<execution id>/<path relative to its directory>`.
pub struct ObjectStoreScraper {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectStoreScraper {
    /// Create a scraper for an S3 compatible store.
    ///
    /// No request is made until the first upload.
    pub fn new(params: &StoreParams) -> Result<Self> {
        if params.bucket.is_empty() {
            return Err(Error::Config(String::from("bucket name is empty")));
        }

        let mut builder = AmazonS3Builder::new()
            .with_endpoint(params.endpoint_url())
            .with_bucket_name(&params.bucket)
            .with_access_key_id(&params.access_key_id)
            .with_secret_access_key(&params.secret_access_key)
            .with_allow_http(!params.ssl)
            .with_virtual_hosted_style_request(false);

        if !params.location.is_empty() {
            builder = builder.with_region(&params.location);
        }
        if !params.token.is_empty() {
            builder = builder.with_token(&params.token);
        }

        Ok(Self {
            inner: Arc::new(builder.build()?),
        })
    }

    /// Create a scraper writing to an already configured store.
    pub fn with_store(inner: Arc<dyn ObjectStore>) -> Self {
        Self { inner }
    }

    async fn upload_directory(&self, execution_id: &str, directory: &PathBuf) -> Result<usize> {
        if !directory.is_dir() {
            return Err(Error::MissingDirectory(directory.clone()));
        }

        let local = LocalFileSystem::new_with_prefix(directory)?;
        let files: Vec<ObjectMeta> = local.list(None).try_collect().await?;

        for file in files.iter() {
            let key = Path::from(format!("{execution_id}/{}", file.location));
            let bytes = local.get(&file.location).await?.bytes().await?;
            debug!("Uploading {} ({} bytes)", key, bytes.len());
            self.inner.put(&key, PutPayload::from_bytes(bytes)).await?;
        }
        Ok(files.len())
    }
}

#[async_trait]
impl Scraper for ObjectStoreScraper {
    async fn scrape(&self, execution_id: &str, directories: &[PathBuf]) -> Result<()> {
        for directory in directories {
            let count = self.upload_directory(execution_id, directory).await?;
            info!(
                "Uploaded {count} artifact(s) from {:?} for execution {execution_id}",
                directory
            );
        }
        Ok(())
    }
}
