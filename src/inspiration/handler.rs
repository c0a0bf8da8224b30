use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use tracing::info;

use super::error::UploadError;
use super::sink::Upload;
use crate::AppState;
use crate::config::UploadConfig;
use crate::ui::upload::{UPLOAD_SUCCESS, upload_status_html};

/// Multipart field carrying the image.
pub const IMAGE_FIELD: &str = "image";

/// POST /api/inspiration - Accept one image and forward it to the webhook.
///
/// Responds with the status banner fragment in every case.
pub async fn inspiration_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, UploadError> {
    let sink = state.sink.as_ref().ok_or(UploadError::NotConfigured)?;

    let upload = read_image(&mut multipart, &state.config.upload).await?;
    info!(
        name: "inspiration.received",
        file_name = %upload.file_name,
        content_type = %upload.content_type,
        size = upload.bytes.len(),
        "Inspiration image received"
    );

    if !state.upload_limiter.check() {
        return Err(UploadError::RateLimited);
    }

    let file_name = upload.file_name.clone();
    sink.forward(upload).await?;
    info!(name: "inspiration.forwarded", file_name = %file_name, "Inspiration image forwarded");

    Ok(Html(upload_status_html(true, UPLOAD_SUCCESS)))
}

/// Read the `image` field, skipping any others.
async fn read_image(
    multipart: &mut Multipart,
    config: &UploadConfig,
) -> Result<Upload, UploadError> {
    let max_bytes = config.max_bytes;
    let too_large = || UploadError::TooLarge {
        limit: config.max_size_label(),
    };
    let map_err = |e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            too_large()
        } else {
            UploadError::Multipart(e.body_text())
        }
    };

    while let Some(mut field) = multipart.next_field().await.map_err(map_err)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map_or_else(|| format!("inspiration-{}", uuid::Uuid::new_v4()), str::to_owned);
        let content_type = content_type_of(&field, &file_name);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(map_err)? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(too_large());
            }
            bytes.extend_from_slice(&chunk);
        }

        // Browsers send an empty part when nothing was picked
        if bytes.is_empty() {
            return Err(UploadError::MissingFile);
        }
        return match content_type {
            Some(content_type) if content_type.starts_with("image/") => Ok(Upload {
                file_name,
                content_type,
                bytes,
            }),
            other => Err(UploadError::NotAnImage {
                content_type: other.unwrap_or_default(),
            }),
        };
    }

    Err(UploadError::MissingFile)
}

/// Declared content type, falling back to a guess from the file name.
fn content_type_of(field: &Field<'_>, file_name: &str) -> Option<String> {
    field
        .content_type()
        .filter(|ct| *ct != "application/octet-stream")
        .map(str::to_owned)
        .or_else(|| {
            mime_guess::from_path(file_name)
                .first_raw()
                .map(str::to_owned)
        })
}
