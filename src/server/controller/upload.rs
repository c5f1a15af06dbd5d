use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, upload::UploadDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::upload::ImageUpload,
        service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Name of the multipart field carrying the image.
const FILE_FIELD: &str = "file";

fn bad_multipart(err: MultipartError) -> AppError {
    AppError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
}

/// Upload an image for use in content.
///
/// Stored on Cloudinary when configured, otherwise on local disk and served from
/// `/uploads`.
///
/// # Access Control
/// - `Admin` - Only admins can upload images
///
/// # Arguments
/// - `state` - Application state containing HTTP client and config
/// - `session` - User's session for authentication
/// - `multipart` - Form with the image in the `file` field
///
/// # Returns
/// - `201 Created` - Public URL of the stored image
/// - `400 Bad Request` - Missing file, non-image content type, empty or oversized file
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 201, description = "Image stored", body = UploadDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.store, &session)
        .require(&[Permission::Admin])
        .await?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(bad_multipart)?;

        upload = Some(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let Some(upload) = upload else {
        return Err(AppError::BadRequest(format!(
            "Missing '{}' field",
            FILE_FIELD
        )));
    };

    let stored = UploadService::new(&state.http_client, &state.config)
        .store(upload)
        .await?;

    Ok((StatusCode::CREATED, Json(stored.into_dto())))
}
