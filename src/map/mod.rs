mod altitude;
pub(crate) mod geometry;
mod paint;
mod projection;
mod renderer;

pub use altitude::{AltitudeMode, Smoothed};
pub use paint::{DrawCall, Painter, RecordingPainter, Rgba};
pub use projection::{CameraState, ClampedPoint, ProjectionEngine};
pub use renderer::{polygon_path, FrameStats, LatitudeBand, Palette, RegionRenderer};
