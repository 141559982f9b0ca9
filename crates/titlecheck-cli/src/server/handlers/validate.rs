//! Upload validation handler.

use std::path::Path;

use axum::{
    Json,
    extract::{Multipart, State},
};
use titlecheck::{FileFormat, ValidationResult};
use tracing::{info, warn};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Multipart field carrying the upload.
pub const FILE_FIELD: &str = "file";

/// Validate an uploaded sheet and return the full result.
///
/// The upload stays in memory; nothing is written to disk.
pub async fn validate_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ValidationResult>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let contents = field.bytes().await?;
        upload = Some((file_name, contents));
        break;
    }

    let Some((file_name, contents)) = upload else {
        warn!("upload without a file part");
        return Err(ApiError::BadRequest("No file part".to_string()));
    };

    // Drop any client-side directories from the name.
    let file_name = Path::new(&file_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if file_name.is_empty() {
        warn!("upload with an empty file name");
        return Err(ApiError::BadRequest("No selected file".to_string()));
    }

    if FileFormat::from_path(&file_name).is_err() {
        warn!(file = %file_name, "rejected upload extension");
        return Err(ApiError::BadRequest(format!(
            "Invalid file type '{}' (allowed: {})",
            file_name,
            FileFormat::EXTENSIONS.join(", ")
        )));
    }

    let checker = state.checker.clone();
    let result = tokio::task::spawn_blocking(move || checker.validate_upload(&file_name, &contents))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    info!(
        file = %result.source.file,
        rows = result.summary.rows_checked,
        findings = result.summary.total_findings,
        "validated upload"
    );

    Ok(Json(result))
}
