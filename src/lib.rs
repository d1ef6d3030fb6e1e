//! Capture Service
//!
//! Backend relay between a motion-triggered camera and a web frontend.
//! Stores uploaded captures in S3, records them in Postgres, and exposes
//! a single-slot trigger flag the device polls for manual capture requests.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
