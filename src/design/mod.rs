//! Text-to-design heuristic.
//!
//! The generator is a pure function of the description (plus an optional shape seed). It reads
//! a category and a mood out of the text through fixed keyword tables, pulls a short hook for the
//! headline, and picks palette and copy variants by hashing the normalized text.

mod generator;
mod shapes;
mod spec;
mod suggest;
mod tables;
mod text;

pub use generator::{DesignAnalysis, analyze_description, generate_design, generate_design_seeded};
pub use shapes::{SAFE_ZONE_MAX_LEFT, SAFE_ZONE_MIN_TOP};
pub use spec::{DesignSpec, Gradient, MAX_SHAPE_BLUR, MAX_SHAPE_SIZE, Shape};
pub use tables::{Category, CategoryProfile, Mood, Palette};
