/// Image handlers - HTTP endpoints for capture upload and listing
use crate::error::Result;
use crate::models::MotionImage;
use crate::services::CaptureService;
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ImageEntry {
    pub url: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ImageListResponse {
    pub images: Vec<ImageEntry>,
}

impl From<MotionImage> for ImageEntry {
    fn from(image: MotionImage) -> Self {
        Self {
            url: image.image_url,
            timestamp: image.captured_at.to_rfc3339(),
        }
    }
}

/// Store an uploaded capture (device)
///
/// Body is the raw JPEG bytes. Empty payloads are rejected before any
/// storage access.
pub async fn upload_image(
    service: web::Data<CaptureService>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let url = service.upload_image(body.to_vec()).await?;

    Ok(HttpResponse::Created().json(UploadResponse {
        message: "Image uploaded successfully".to_string(),
        url,
    }))
}

/// List all stored captures, most recent first (frontend)
pub async fn list_images(service: web::Data<CaptureService>) -> Result<HttpResponse> {
    let images = service
        .list_images()
        .await?
        .into_iter()
        .map(ImageEntry::from)
        .collect();

    Ok(HttpResponse::Ok().json(ImageListResponse { images }))
}
