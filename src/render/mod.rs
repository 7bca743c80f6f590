//! Rasterization of a [`DesignSpec`](crate::DesignSpec) into premultiplied RGBA8 frames.
//!
//! The live preview and the exported PNG share this code path, so an export always matches what
//! was rendered.

mod backdrop;
mod backend;
mod blur;
mod composite;
mod contrast;
mod cpu;
mod layout;
mod text;

pub use backend::{FrameRGBA, Rasterizer, RenderSettings};
pub use composite::{PremulRgba8, over, screen};
pub use contrast::{CONTRAST_DARK, CONTRAST_LIGHT, LUMINANCE_THRESHOLD, contrast_color, luminance};
pub use cpu::{CpuRenderer, FOOTER_LEFT, FOOTER_RIGHT};
