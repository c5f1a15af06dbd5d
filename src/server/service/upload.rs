//! Admin image uploads: Cloudinary when configured, the local upload directory otherwise.

use std::{
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::Utc;

use crate::server::{
    config::Config,
    error::AppError,
    model::upload::{ImageUpload, StoredImage, UploadProvider, MAX_UPLOAD_BYTES},
    service::integration::cloudinary::CloudinaryClient,
    util::slug::slugify,
};

/// URL prefix the upload directory is served under.
pub const LOCAL_UPLOAD_PREFIX: &str = "/uploads";

static UPLOAD_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct UploadService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> UploadService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Stores an uploaded image and returns its public URL
    ///
    /// # Returns
    /// - `Ok(StoredImage)` - Cloudinary URL, or `/uploads/{name}` for local storage
    /// - `Err(AppError::BadRequest)` - Not an image, empty or larger than 10 MiB
    /// - `Err(AppError::IoErr)` - Local write failed
    pub async fn store(&self, upload: ImageUpload) -> Result<StoredImage, AppError> {
        validate(&upload)?;

        if let Some(cloudinary) = &self.config.cloudinary {
            let client = CloudinaryClient::new(self.http_client, cloudinary);
            match client.upload(upload.clone(), Utc::now().timestamp()).await {
                Ok(url) => {
                    return Ok(StoredImage {
                        url,
                        provider: UploadProvider::Cloudinary,
                    })
                }
                Err(e) => {
                    tracing::warn!("Cloudinary upload failed, storing image locally: {}", e);
                }
            }
        } else {
            tracing::warn!("Cloudinary is not configured; storing image locally");
        }

        self.store_locally(upload).await
    }

    async fn store_locally(&self, upload: ImageUpload) -> Result<StoredImage, AppError> {
        let name = unique_file_name(&upload.file_name, &upload.content_type);

        tokio::fs::create_dir_all(&self.config.upload_dir).await?;
        tokio::fs::write(self.config.upload_dir.join(&name), &upload.bytes).await?;

        tracing::info!("Stored upload {} ({} bytes)", name, upload.bytes.len());

        Ok(StoredImage {
            url: format!("{}/{}", LOCAL_UPLOAD_PREFIX, name),
            provider: UploadProvider::Local,
        })
    }
}

fn validate(upload: &ImageUpload) -> Result<(), AppError> {
    if !upload.content_type.starts_with("image/") {
        return Err(AppError::BadRequest("Only image uploads are allowed".to_string()));
    }
    if upload.bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }
    if upload.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest(format!(
            "Image exceeds the {} MiB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

/// `{millis}-{counter}-{slugified stem}.{ext}`; never contains path separators.
fn unique_file_name(original: &str, content_type: &str) -> String {
    let path = Path::new(original);
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(slugify)
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "image".to_string());

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| extension_for(content_type).to_string());

    let counter = UPLOAD_COUNTER.fetch_add(1, Ordering::Relaxed);

    format!(
        "{}-{}-{}.{}",
        Utc::now().timestamp_millis(),
        counter,
        stem,
        extension
    )
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        "image/avif" => "avif",
        _ => "jpg",
    }
}
