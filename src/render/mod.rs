//! Rendering engine with pluggable backends.
//!
//! This module provides:
//! - The backend-agnostic [`Scene`] trait header cells draw through
//! - A retained [`SceneGraph`] for tests and layout reports
//! - A Canvas 2D backend
//! - Color helpers

pub mod backend;
pub mod canvas;
pub mod colors;
mod scene;

pub use backend::Scene;
pub use canvas::CanvasScene;
pub use colors::{with_opacity, Rgb};
pub use scene::{SceneGraph, Shape};
