//! egui application: controller, shared state, and renderer.

pub mod controller;
pub mod state;
pub mod ui;
