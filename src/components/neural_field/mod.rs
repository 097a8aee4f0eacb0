//! Animated neural-field background component.
//!
//! Renders a field of drifting 3-D nodes behind the page content with:
//! - Proximity-based connecting lines, brighter the closer the pair
//! - A fixed-capacity line buffer repacked in place every frame
//! - A perspective camera swinging on a fixed orbit around the field
//! - Dark/light color modes applied in place to a live session
//!
//! # Example
//!
//! ```ignore
//! use neural_field_canvas::{ColorMode, FieldConfig, NeuralFieldCanvas};
//!
//! let (mode, _set_mode) = signal(ColorMode::Dark);
//!
//! view! { <NeuralFieldCanvas mode=mode config=Some(FieldConfig::default()) /> }
//! ```

pub mod buffer;
pub mod camera;
mod component;
mod config;
mod render;
pub mod state;
pub mod theme;

pub use component::NeuralFieldCanvas;
pub use config::FieldConfig;
pub use theme::ColorMode;
