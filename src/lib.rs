//! Library exports for reuse in tests.
/// Application directory helpers.
pub mod app_dirs;
/// Batch CSV prediction.
pub mod batch;
/// Persisted application settings.
pub mod config;
/// Single-record diagnosis service.
pub mod diagnosis;
/// Shared egui UI modules.
pub mod egui_app;
/// Screening fields and encoding tables.
pub mod features;
/// Logging setup.
pub mod logging;
/// Classifier loading and inference.
pub mod ml;
