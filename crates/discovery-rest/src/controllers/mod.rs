//! HTTP controllers.

pub mod health_controller;
pub mod resource_controller;
