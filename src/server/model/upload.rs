use crate::model::upload::{UploadDto, UploadProviderDto};

/// Maximum accepted image size in bytes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadProvider {
    Cloudinary,
    Local,
}

/// An image received from the admin panel.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub url: String,
    pub provider: UploadProvider,
}

impl StoredImage {
    pub fn into_dto(self) -> UploadDto {
        UploadDto {
            url: self.url,
            provider: match self.provider {
                UploadProvider::Cloudinary => UploadProviderDto::Cloudinary,
                UploadProvider::Local => UploadProviderDto::Local,
            },
        }
    }
}
