/// Shared-secret authentication middleware
///
/// Every guarded route requires the x-api-key header to exactly match the
/// server-held secret. The check runs before any storage access; a missing
/// or mismatched key is answered with the 403 response directly, without
/// entering the wrapped service.
use crate::error::AppError;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    Error,
};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

pub const API_KEY_HEADER: &str = "x-api-key";

/// API key authentication middleware
pub struct ApiKeyAuth {
    expected: Rc<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            expected: Rc::new(api_key.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthService {
            service: Rc::new(service),
            expected: self.expected.clone(),
        }))
    }
}

pub struct ApiKeyAuthService<S> {
    service: Rc<S>,
    expected: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let expected = self.expected.clone();

        Box::pin(async move {
            let supplied = req
                .headers()
                .get(API_KEY_HEADER)
                .and_then(|h| h.to_str().ok());

            match supplied {
                Some(key) if key == expected.as_str() => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                supplied => {
                    if supplied.is_some() {
                        tracing::warn!("request rejected: API key mismatch");
                    }
                    let response = AppError::Forbidden.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn test_handler() -> HttpResponse {
        HttpResponse::Ok().body("success")
    }

    #[actix_web::test]
    async fn rejects_missing_key() {
        let app = test::init_service(
            App::new()
                .wrap(ApiKeyAuth::new("secret"))
                .route("/test", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Could not validate credentials");
    }

    #[actix_web::test]
    async fn rejects_wrong_key() {
        let app = test::init_service(
            App::new()
                .wrap(ApiKeyAuth::new("secret"))
                .route("/test", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/test")
            .insert_header((API_KEY_HEADER, "not-the-secret"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn accepts_matching_key() {
        let app = test::init_service(
            App::new()
                .wrap(ApiKeyAuth::new("secret"))
                .route("/test", web::get().to(test_handler)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/test")
            .insert_header((API_KEY_HEADER, "secret"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
