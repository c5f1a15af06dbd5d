use crate::server::{
    config::{CloudinaryConfig, Config},
    model::upload::{ImageUpload, UploadProvider},
    service::upload::UploadService,
};

use super::*;


/// Test config writing local uploads to a fresh temporary directory.
fn local_config(test_name: &str) -> Config {
    let mut config = Config::test();
    config.upload_dir = std::env::temp_dir().join(format!(
        "hill-country-guide-{}-{}",
        test_name,
        std::process::id()
    ));
    config
}

fn png(name: &str) -> ImageUpload {
    ImageUpload {
        file_name: name.to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}
