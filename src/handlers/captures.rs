/// Trigger handlers - HTTP endpoints for the capture trigger mailbox
use crate::error::Result;
use crate::services::CaptureService;
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TriggerResponse {
    pub trigger: bool,
}

/// Request a manual capture (frontend)
pub async fn trigger_capture(service: web::Data<CaptureService>) -> Result<HttpResponse> {
    service.request_capture().await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Capture triggered successfully.".to_string(),
    }))
}

/// Poll for a pending capture command (device)
///
/// Reading a pending trigger clears it, so each assertion is delivered
/// at most once.
pub async fn check_trigger(service: web::Data<CaptureService>) -> Result<HttpResponse> {
    let trigger = service.poll_trigger().await?;

    Ok(HttpResponse::Ok().json(TriggerResponse { trigger }))
}

/// Liveness probe, unauthenticated
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
