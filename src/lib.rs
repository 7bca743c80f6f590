//! Thumbsmith turns a one-line video idea into a ready-to-export YouTube thumbnail.
//!
//! The flow is:
//!
//! - [`generate_design`] maps free text to a [`DesignSpec`] (copy, palette, decorative shapes)
//! - a [`Rasterizer`] such as [`CpuRenderer`] paints it into a premultiplied RGBA8 frame
//! - [`Session::export`] encodes that frame as PNG and hands it to a [`FileDelivery`]
#![forbid(unsafe_code)]

mod foundation;

pub mod design;
pub mod export;
pub mod render;
pub mod session;
pub mod settings;

pub use crate::design::{
    Category, DesignAnalysis, DesignSpec, Gradient, Mood, Shape, analyze_description,
    generate_design, generate_design_seeded,
};
pub use crate::export::{
    DirectoryDelivery, ExportOutcome, FileDelivery, InMemoryDelivery, encode_png,
};
pub use crate::foundation::color::Rgb8;
pub use crate::foundation::core::{Canvas, PREVIEW_WIDTH, Rgba8Premul};
pub use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};
pub use crate::render::{CpuRenderer, FrameRGBA, Rasterizer, RenderSettings, contrast_color};
pub use crate::session::{DEFAULT_DESCRIPTION, QUICK_IDEAS, Session};
pub use crate::settings::ThumbnailSettings;
