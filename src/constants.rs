//! Shared template-wide constants.
//! Centralizes the physical layout values and visual sizes used when drawing
//! the template.

// Unit conversion
/// Millimeters per inch, for page sizing and DPI conversions.
pub const MM_PER_INCH: f32 = 25.4;

// Physical layout
/// Diameter of a standard petri dish, in millimeters.
pub const PLATE_DIAMETER_MM: f32 = 90.0;
/// Distance of each disc center from the plate center, in millimeters.
/// Leaves roughly a 15 mm buffer between disc centers and the plate rim.
pub const DISC_CENTER_RADIUS_MM: f32 = 30.0;
/// Number of evenly spaced branches around the plate.
pub const BRANCH_COUNT: usize = 7;
/// Length of the inward guide tick drawn from each disc position, in millimeters.
pub const TICK_INSET_MM: f32 = 20.0;
/// Radial offset of each label from its disc center, in millimeters.
/// Zero places the label directly on the marker.
pub const LABEL_OFFSET_MM: f32 = 0.0;
/// Extra view margin around the plate, in millimeters.
pub const VIEW_MARGIN_MM: f32 = 2.0;
/// Antibiotic disc codes, one per branch, clockwise from the top.
pub const LABELS: [&str; BRANCH_COUNT] = ["CPX", "FO", "AM", "PS", "EN", "GN", "TM"];

// Rendering
/// Pixel density of the raster artifact.
pub const RASTER_DPI: f32 = 300.0;
/// Radius of the pale marker drawn at the plate center, in millimeters.
pub const CENTER_MARKER_RADIUS_MM: f32 = 10.58;
/// Fill color of the center marker.
pub const CENTER_MARKER_COLOR: &str = "#f9eef9";
/// Radius of each disc placement marker, in millimeters.
pub const DISC_MARKER_RADIUS_MM: f32 = 5.29;
/// Stroke width of the guide ticks, in millimeters.
pub const TICK_STROKE_WIDTH_MM: f32 = 5.29;
/// Color of the disc markers and guide ticks.
pub const BRANCH_COLOR: &str = "blue";
/// Label font size, in millimeters (about 9 pt).
pub const LABEL_FONT_SIZE_MM: f32 = 3.18;
/// Label text color.
pub const LABEL_COLOR: &str = "#000";

// Output
/// Default path of the vector artifact.
pub const DEFAULT_VECTOR_PATH: &str = "antibiotic_disc_template_7_branches.svg";
/// Default path of the raster artifact.
pub const DEFAULT_RASTER_PATH: &str = "antibiotic_disc_template_7_branches.png";
