//! Photo Upload Handler
//!
//! Accepts a profile photo from authenticated users and stores it under
//! the work directory. The file is treated as an opaque blob: the server
//! records and returns a reference path, never inspecting the contents.

use std::path::Path;

use axum::Json;
use axum::extract::{Extension, Multipart, State};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported photo extensions
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Public URL prefix photo references are served under
const PUBLIC_PREFIX: &str = "/uploads";

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub original_name: String,
    pub size: usize,
    pub url: String,
}

fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// POST /api/upload - store a photo and return its reference path
pub async fn upload(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("photo") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let ext = extension_of(&original_name)
            .ok_or_else(|| AppError::validation("Photo filename has no extension"))?;
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::validation(format!(
                "Unsupported photo format '{}' (supported: {})",
                ext,
                SUPPORTED_FORMATS.join(", ")
            )));
        }

        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::validation("Photo is empty"));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(format!(
                "Photo too large ({} bytes, max {})",
                data.len(),
                MAX_FILE_SIZE
            )));
        }

        let filename = format!("{}.{}", Uuid::new_v4(), ext);
        let dest = state.config.uploads_dir().join(&filename);
        tokio::fs::write(&dest, &data)
            .await
            .map_err(|e| AppError::internal(format!("Failed to store photo: {}", e)))?;

        tracing::info!(
            uploader = %user.email,
            file = %filename,
            size = data.len(),
            "Photo uploaded"
        );

        return Ok(Json(UploadResponse {
            url: format!("{}/{}", PUBLIC_PREFIX, filename),
            filename,
            original_name,
            size: data.len(),
        }));
    }

    Err(AppError::validation("Missing 'photo' field"))
}
