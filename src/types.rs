//! Core data types for the disc placement template.
//!
//! This module defines the validated template configuration, the computed
//! per-branch geometry, and the error type shared across the crate.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Errors produced while building or rendering a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The label sequence does not cover every branch (or covers too many).
    #[error("label count {labels} does not match branch count {branches}")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of branches requested.
        branches: usize,
    },
    /// A layout with zero branches has nothing to draw.
    #[error("branch count must be at least 1")]
    EmptyLayout,
    /// Writing an output artifact failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The generated SVG document could not be parsed for rasterization.
    #[error("SVG parse error: {0}")]
    Svg(#[from] usvg::Error),
    /// The raster surface could not be allocated.
    #[error("could not allocate a {width}x{height} pixmap")]
    Pixmap {
        /// Requested pixmap width in pixels.
        width: u32,
        /// Requested pixmap height in pixels.
        height: u32,
    },
    /// Encoding the raster surface as PNG failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

/// Validated configuration of one placement template.
///
/// Coordinates are millimeters in a plate-centered frame with y pointing up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSpec {
    /// Plate diameter in millimeters.
    pub plate_diameter_mm: f32,
    /// Distance of disc centers from the plate center, in millimeters.
    pub disc_center_radius_mm: f32,
    /// Number of evenly spaced branches.
    pub branch_count: usize,
    /// Length of the inward guide tick, in millimeters.
    pub tick_inset_mm: f32,
    /// Radial offset of labels from their disc centers, in millimeters.
    pub label_offset_mm: f32,
    /// Disc codes, one per branch, clockwise from the top.
    pub labels: Vec<String>,
}

/// One radially placed disc position with its derived geometry.
///
/// Branches are independent values; nothing mutates them after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Branch angle in degrees, measured counterclockwise from the x axis.
    pub angle_deg: f32,
    /// Disc code printed at this position.
    pub label: String,
    /// Disc center, in millimeters from the plate center.
    pub outer: (f32, f32),
    /// Inward end of the guide tick.
    pub inner: (f32, f32),
    /// Anchor point of the label text.
    pub label_anchor: (f32, f32),
}

impl TemplateSpec {
    /// Creates a validated template configuration.
    ///
    /// Fails with [`TemplateError::LabelCountMismatch`] when the label
    /// sequence does not have exactly one entry per branch, and with
    /// [`TemplateError::EmptyLayout`] when `branch_count` is zero. A
    /// mismatch would otherwise silently truncate the layout to the shorter
    /// sequence.
    pub fn new(
        plate_diameter_mm: f32,
        disc_center_radius_mm: f32,
        branch_count: usize,
        tick_inset_mm: f32,
        label_offset_mm: f32,
        labels: Vec<String>,
    ) -> Result<Self, TemplateError> {
        if branch_count == 0 {
            return Err(TemplateError::EmptyLayout);
        }
        if labels.len() != branch_count {
            return Err(TemplateError::LabelCountMismatch {
                labels: labels.len(),
                branches: branch_count,
            });
        }
        Ok(Self {
            plate_diameter_mm,
            disc_center_radius_mm,
            branch_count,
            tick_inset_mm,
            label_offset_mm,
            labels,
        })
    }

    /// Plate radius in millimeters.
    pub fn plate_radius_mm(&self) -> f32 {
        self.plate_diameter_mm / 2.0
    }

    /// Half-width of the square viewport, in millimeters.
    ///
    /// Fixed at plate radius plus a small margin; never auto-fit to the
    /// drawn content.
    pub fn view_half_extent_mm(&self) -> f32 {
        self.plate_radius_mm() + constants::VIEW_MARGIN_MM
    }

    /// Branch angles in degrees, evenly spaced clockwise from the top.
    ///
    /// Branch `i` sits at `90 - i * (360 / branch_count)` degrees.
    pub fn angles_deg(&self) -> Vec<f32> {
        let step = 360.0 / self.branch_count as f32;
        (0..self.branch_count)
            .map(|i| 90.0 - i as f32 * step)
            .collect()
    }

    /// Computes the full branch layout: one [`Branch`] per label, in order.
    pub fn branches(&self) -> Vec<Branch> {
        self.angles_deg()
            .into_iter()
            .zip(&self.labels)
            .map(|(angle_deg, label)| {
                let theta = angle_deg.to_radians();
                let (sin, cos) = theta.sin_cos();
                let at = |r: f32| (r * cos, r * sin);
                Branch {
                    angle_deg,
                    label: label.clone(),
                    outer: at(self.disc_center_radius_mm),
                    inner: at(self.disc_center_radius_mm - self.tick_inset_mm),
                    label_anchor: at(self.disc_center_radius_mm + self.label_offset_mm),
                }
            })
            .collect()
    }
}

impl Default for TemplateSpec {
    /// The standard 7-branch template for a 90 mm plate.
    fn default() -> Self {
        Self {
            plate_diameter_mm: constants::PLATE_DIAMETER_MM,
            disc_center_radius_mm: constants::DISC_CENTER_RADIUS_MM,
            branch_count: constants::BRANCH_COUNT,
            tick_inset_mm: constants::TICK_INSET_MM,
            label_offset_mm: constants::LABEL_OFFSET_MM,
            labels: constants::LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(p: (f32, f32)) -> f32 {
        (p.0 * p.0 + p.1 * p.1).sqrt()
    }

    #[test]
    fn default_spec_matches_plate_constants() {
        let spec = TemplateSpec::default();
        assert_eq!(spec.plate_radius_mm(), 45.0);
        assert_eq!(spec.view_half_extent_mm(), 47.0);
        assert_eq!(spec.branch_count, 7);
        assert_eq!(spec.labels.len(), 7);
    }

    #[test]
    fn angles_start_at_top_and_step_clockwise() {
        let spec = TemplateSpec::default();
        let angles = spec.angles_deg();
        assert_eq!(angles.len(), 7);
        for (i, angle) in angles.iter().enumerate() {
            let expected = 90.0 - i as f32 * (360.0 / 7.0);
            assert!((angle - expected).abs() < 1e-4, "branch {i}: {angle}");
        }
        // Clockwise means strictly decreasing angles.
        for pair in angles.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn branches_preserve_label_order() {
        let spec = TemplateSpec::default();
        let labels: Vec<String> = spec.branches().into_iter().map(|b| b.label).collect();
        assert_eq!(labels, ["CPX", "FO", "AM", "PS", "EN", "GN", "TM"]);
    }

    #[test]
    fn branch_points_sit_on_their_radii() {
        let spec = TemplateSpec::default();
        let branches = spec.branches();
        assert_eq!(branches.len(), 7);
        for branch in &branches {
            assert!((dist(branch.outer) - 30.0).abs() < 1e-3, "{:?}", branch);
            assert!((dist(branch.inner) - 10.0).abs() < 1e-3, "{:?}", branch);
        }
    }

    #[test]
    fn zero_label_offset_anchors_text_on_the_marker() {
        let spec = TemplateSpec::default();
        for branch in spec.branches() {
            assert_eq!(branch.label_anchor, branch.outer);
        }
    }

    #[test]
    fn first_branch_points_straight_up() {
        let spec = TemplateSpec::default();
        let first = &spec.branches()[0];
        assert!(first.outer.0.abs() < 1e-4);
        assert!((first.outer.1 - 30.0).abs() < 1e-4);
        assert!((first.inner.1 - 10.0).abs() < 1e-4);
    }

    #[test]
    fn mismatched_label_count_is_rejected() {
        let labels = vec!["CPX".to_string(), "FO".to_string()];
        let result = TemplateSpec::new(90.0, 30.0, 7, 20.0, 0.0, labels);
        assert!(matches!(
            result,
            Err(TemplateError::LabelCountMismatch { labels: 2, branches: 7 })
        ));
    }

    #[test]
    fn zero_branches_are_rejected() {
        let result = TemplateSpec::new(90.0, 30.0, 0, 20.0, 0.0, vec![]);
        assert!(matches!(result, Err(TemplateError::EmptyLayout)));
    }

    #[test]
    fn new_accepts_the_default_configuration() {
        let spec = TemplateSpec::new(
            90.0,
            30.0,
            7,
            20.0,
            0.0,
            crate::constants::LABELS.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        assert_eq!(spec, TemplateSpec::default());
    }
}
