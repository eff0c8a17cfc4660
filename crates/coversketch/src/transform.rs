//! Panel-space to device-space mapping.
//!
//! The panel is scaled uniformly so it fits inside the surface minus fixed
//! margins on both axes. The axis with less room per panel unit decides the
//! scale; the other axis is left with surplus space on its far side.

use log::debug;

use coversketch_core::geometry::{Bounds, Insets, Point, Size};

/// Margins kept clear around the panel for labels and dimension arrows.
///
/// Left 50, right 130, top 90, bottom 100 device pixels.
pub const SKETCH_MARGINS: Insets = Insets::new(90.0, 130.0, 100.0, 50.0);

/// A uniform scale plus the device position of the panel's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    scale: f32,
    offset: Point,
}

impl ScaleTransform {
    /// Computes the transform fitting `panel` into `surface` inside `margins`.
    ///
    /// Surfaces smaller than their margins produce a zero or negative scale;
    /// callers are expected to size surfaces sensibly.
    pub fn compute(surface: Size, panel: Size, margins: Insets) -> Self {
        let available = surface.shrink(margins);
        let scale_x = available.width() / panel.width();
        let scale_y = available.height() / panel.height();
        let scale = scale_x.min(scale_y);

        debug!(scale_x, scale_y, scale; "Computed sketch scale");

        Self {
            scale,
            offset: Point::new(margins.left(), margins.top()),
        }
    }

    /// Device pixels per panel unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset_x(&self) -> f32 {
        self.offset.x()
    }

    pub fn offset_y(&self) -> f32 {
        self.offset.y()
    }

    /// Maps a panel-space point to device space.
    ///
    /// Panel Y grows toward the back while device Y grows downward, so the
    /// front edge (`y = 0`) lands at the bottom of the panel outline.
    pub fn to_device(&self, point: Point, panel_length: f32) -> Point {
        Point::new(
            self.offset.x() + point.x() * self.scale,
            self.offset.y() + (panel_length - point.y()) * self.scale,
        )
    }

    /// Converts a panel-space length to device pixels.
    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Returns the device-space rectangle covered by a panel of the given size.
    pub fn panel_bounds(&self, panel: Size) -> Bounds {
        Bounds::new_from_top_left(self.offset, panel.scale(self.scale))
    }
}
