/// Configuration management for the capture service
///
/// Loads configuration from environment variables. The API key and the
/// database URL are required; everything else falls back to sensible
/// defaults for local development.
use crate::error::AppError;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
    pub s3: S3Config,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthConfig {
    /// Shared secret expected in the x-api-key header
    pub api_key: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Custom endpoint for S3-compatible storage like MinIO
    pub endpoint: Option<String>,
    /// Base URL for public object access (CDN domain); when unset,
    /// virtual-hosted-style S3 URLs are used
    pub public_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Config {
            app: AppConfig {
                host: std::env::var("CAPTURE_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("CAPTURE_SERVICE_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            auth: AuthConfig {
                api_key: std::env::var("API_SECRET_KEY")
                    .map_err(|_| AppError::Config("API_SECRET_KEY is not set".to_string()))?,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .map_err(|_| AppError::Config("DATABASE_URL is not set".to_string()))?,
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .unwrap_or(5),
            },
            s3: S3Config {
                bucket: std::env::var("S3_BUCKET")
                    .map_err(|_| AppError::Config("S3_BUCKET is not set".to_string()))?,
                region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
                secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
                endpoint: std::env::var("S3_ENDPOINT").ok(),
                public_base_url: std::env::var("S3_PUBLIC_BASE_URL").ok(),
            },
        })
    }
}
