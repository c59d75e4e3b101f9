//! Export pipeline: build the template as SVG and rasterize it to PNG.
//!
//! The vector artifact is written directly from the generated SVG string.
//! The raster artifact is produced by parsing that same string back with
//! `usvg` and rendering it into a `tiny_skia` pixmap, so both files always
//! describe the same geometry.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants;
use crate::types::{TemplateError, TemplateSpec};

/// Builds the template as a standalone SVG document.
///
/// The page is sized to the plate diameter in millimeters so the printed
/// output approximates true physical scale. User units inside the viewBox
/// are data millimeters; the y axis is negated on emission since SVG y
/// grows downward.
pub fn build_svg(spec: &TemplateSpec) -> String {
    let half = spec.view_half_extent_mm();
    let page = spec.plate_diameter_mm;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{page:.3}mm\" height=\"{page:.3}mm\" viewBox=\"{min:.3} {min:.3} {span:.3} {span:.3}\">",
        page = page,
        min = -half,
        span = 2.0 * half
    );

    // Center marker, drawn below everything else.
    let _ = writeln!(
        out,
        "  <circle cx=\"0\" cy=\"0\" r=\"{:.3}\" fill=\"{}\" />",
        constants::CENTER_MARKER_RADIUS_MM,
        constants::CENTER_MARKER_COLOR
    );

    for branch in spec.branches() {
        let (ox, oy) = branch.outer;
        let (ix, iy) = branch.inner;
        let (lx, ly) = branch.label_anchor;
        let _ = writeln!(
            out,
            "  <circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"{}\" />",
            ox,
            -oy,
            constants::DISC_MARKER_RADIUS_MM,
            constants::BRANCH_COLOR
        );
        let _ = writeln!(
            out,
            "  <line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"{}\" stroke-width=\"{:.3}\" />",
            ix,
            -iy,
            ox,
            -oy,
            constants::BRANCH_COLOR,
            constants::TICK_STROKE_WIDTH_MM
        );
        let _ = writeln!(
            out,
            "  <text x=\"{:.3}\" y=\"{:.3}\" font-size=\"{:.3}\" fill=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
            lx,
            -ly,
            constants::LABEL_FONT_SIZE_MM,
            constants::LABEL_COLOR,
            escape_xml(&branch.label)
        );
    }

    let _ = writeln!(out, "</svg>");
    out
}

/// Side length of the square raster artifact, in pixels.
///
/// The pixmap covers the plate-diameter page at [`constants::RASTER_DPI`];
/// 1063 px for the default 90 mm spec.
fn raster_side_px(spec: &TemplateSpec) -> u32 {
    (spec.plate_diameter_mm / constants::MM_PER_INCH * constants::RASTER_DPI).round() as u32
}

/// Renders the template and writes both artifacts.
///
/// Writes the SVG to `vector_path`, rasterizes it to a 300 DPI PNG at
/// `raster_path`, and returns both paths unchanged. Existing files are
/// overwritten. All intermediates are owned locals, so the drawing surface
/// is released on every exit path.
pub fn render<P, Q>(
    spec: &TemplateSpec,
    vector_path: P,
    raster_path: Q,
) -> Result<(PathBuf, PathBuf), TemplateError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let vector_path = vector_path.as_ref().to_path_buf();
    let raster_path = raster_path.as_ref().to_path_buf();

    let svg = build_svg(spec);
    log::debug!(
        "built SVG document for {} branches ({} bytes)",
        spec.branch_count,
        svg.len()
    );

    fs::write(&vector_path, svg.as_bytes())?;
    log::info!("wrote vector template to {}", vector_path.display());

    let mut opt = usvg::Options::default();
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    opt.fontdb = Arc::new(db);

    let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)?;

    let side = raster_side_px(spec);
    let mut pixmap = tiny_skia::Pixmap::new(side, side).ok_or(TemplateError::Pixmap {
        width: side,
        height: side,
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    // usvg reports the page size in its own units; scale it onto the pixmap.
    let scale = side as f32 / tree.size().width();
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| TemplateError::PngEncode(e.to_string()))?;
    fs::write(&raster_path, png)?;
    log::info!(
        "wrote raster template to {} ({}x{} px)",
        raster_path.display(),
        side,
        side
    );

    Ok((vector_path, raster_path))
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}
