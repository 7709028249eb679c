//! tracewise-export: Pure format serializers (sans-IO)
//!
//! Renders a drawing over its guide so a therapist can review an attempt.
//! Currently supports SVG.

pub mod svg;

pub use svg::{SvgMetadata, build_path_data, to_svg};
