//! Canvas 2D rendering
//!
//! Executes the simulation's `DrawList` on a `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
