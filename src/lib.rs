//! # Disc Template Tool
//!
//! Generates a printable placement guide for antibiotic discs on a standard
//! 90 mm petri dish. Seven evenly spaced branches radiate from the plate
//! center; each carries a disc marker, an inward guide tick, and the disc
//! code, clockwise from the top.
//!
//! One render produces two artifacts from the same geometry:
//! - an SVG sized to physical scale (the vector file), and
//! - a 300 DPI PNG of the same view (the raster file).
//!
//! The layout is fixed by [`TemplateSpec::default`]; custom configurations
//! go through [`TemplateSpec::new`], which rejects label sequences that do
//! not cover every branch.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
mod export;
mod types;

// Re-export public types and functions
pub use export::{build_svg, render};
pub use types::{Branch, TemplateError, TemplateSpec};

use std::path::PathBuf;

/// Renders the standard template to the default output paths.
///
/// Writes `antibiotic_disc_template_7_branches.svg` and
/// `antibiotic_disc_template_7_branches.png` in the working directory,
/// overwriting existing files, and returns both paths.
///
/// # Example
///
/// ```no_run
/// fn main() -> Result<(), disc_template_tool::TemplateError> {
///     let (vector, raster) = disc_template_tool::render_default()?;
///     println!("{} {}", vector.display(), raster.display());
///     Ok(())
/// }
/// ```
pub fn render_default() -> Result<(PathBuf, PathBuf), TemplateError> {
    render(
        &TemplateSpec::default(),
        constants::DEFAULT_VECTOR_PATH,
        constants::DEFAULT_RASTER_PATH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_has_one_label_per_branch() {
        let spec = TemplateSpec::default();
        assert_eq!(spec.labels.len(), spec.branch_count);
        assert_eq!(spec.branches().len(), spec.branch_count);
    }

    #[test]
    fn default_paths_share_the_template_stem() {
        assert_eq!(
            constants::DEFAULT_VECTOR_PATH,
            "antibiotic_disc_template_7_branches.svg"
        );
        assert_eq!(
            constants::DEFAULT_RASTER_PATH,
            "antibiotic_disc_template_7_branches.png"
        );
    }
}
