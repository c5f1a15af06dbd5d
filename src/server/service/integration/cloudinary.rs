use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::server::{
    config::CloudinaryConfig, error::AppError, model::upload::ImageUpload,
    service::integration::ensure_success,
};

/// Cloudinary folder all admin uploads go to.
pub const UPLOAD_FOLDER: &str = "hill-country-guide";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Signs upload parameters: parameters sorted by name and joined as `k=v&k=v`,
/// followed by the API secret, hashed with SHA-256.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

pub struct CloudinaryClient<'a> {
    http_client: &'a reqwest::Client,
    config: &'a CloudinaryConfig,
}

impl<'a> CloudinaryClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a CloudinaryConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Uploads an image with a signed request and returns its HTTPS URL.
    ///
    /// # Arguments
    /// - `upload` - The image bytes with their original name and content type
    /// - `timestamp` - Unix seconds included in the signature
    pub async fn upload(&self, upload: ImageUpload, timestamp: i64) -> Result<String, AppError> {
        let timestamp = timestamp.to_string();
        let signature = sign(
            &[("folder", UPLOAD_FOLDER), ("timestamp", timestamp.as_str())],
            &self.config.api_secret,
        );

        let file = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;

        let form = Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", UPLOAD_FOLDER)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .http_client
            .post(format!(
                "{}/{}/image/upload",
                self.config.base_url, self.config.cloud_name
            ))
            .multipart(form)
            .send()
            .await?;

        let uploaded = ensure_success("Cloudinary", response)
            .await?
            .json::<UploadResponse>()
            .await?;

        Ok(uploaded.secure_url)
    }
}
