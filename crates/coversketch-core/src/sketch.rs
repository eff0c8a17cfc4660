//! The sketch model: what a cover looks like before and after layout.
//!
//! A [`SketchRequest`] is the validated input describing a panel and its
//! holes in human terms (centered, or offset from a chosen edge pair). Layout
//! turns it into a [`SketchLayout`] whose [`ResolvedHole`]s carry absolute
//! panel-space centers.
//!
//! All dimensions share one implicit unit (inches by convention). None of
//! these types validate their inputs; the collector that builds a request is
//! responsible for rejecting non-positive dimensions and negative offsets.

use std::fmt;

use serde::Deserialize;

use crate::geometry::{Point, Size};

/// The vertical edge a horizontal offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum XDirection {
    #[serde(rename = "from-left", alias = "From Left")]
    FromLeft,
    #[serde(rename = "from-right", alias = "From Right")]
    FromRight,
}

impl fmt::Display for XDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromLeft => f.write_str("From Left"),
            Self::FromRight => f.write_str("From Right"),
        }
    }
}

/// The horizontal edge a vertical offset is measured from.
///
/// The front is the `y = 0` edge of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum YDirection {
    #[serde(rename = "from-front", alias = "From Front")]
    FromFront,
    #[serde(rename = "from-back", alias = "From Back")]
    FromBack,
}

impl fmt::Display for YDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromFront => f.write_str("From Front"),
            Self::FromBack => f.write_str("From Back"),
        }
    }
}

/// How a hole is placed on the panel.
///
/// Offsets measure the gap between the chosen edge and the nearest point of
/// the hole, not its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HolePlacement {
    /// At the geometric center of the panel.
    Centered,
    /// Located by two independent offsets from a chosen edge pair.
    Offset {
        x_direction: XDirection,
        x_offset: f32,
        y_direction: YDirection,
        y_offset: f32,
    },
}

impl HolePlacement {
    /// Returns true for [`HolePlacement::Centered`].
    pub fn is_centered(&self) -> bool {
        matches!(self, Self::Centered)
    }
}

/// One circular penetration as requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleSpec {
    diameter: f32,
    collar_height: f32,
    placement: HolePlacement,
}

impl HoleSpec {
    /// Creates a hole specification.
    ///
    /// # Arguments
    ///
    /// * `diameter` - Hole diameter
    /// * `collar_height` - Height of the raised collar around the hole
    /// * `placement` - Where the hole sits on the panel
    pub fn new(diameter: f32, collar_height: f32, placement: HolePlacement) -> Self {
        Self {
            diameter,
            collar_height,
            placement,
        }
    }

    /// Shorthand for a hole at the center of the panel.
    pub fn centered(diameter: f32, collar_height: f32) -> Self {
        Self::new(diameter, collar_height, HolePlacement::Centered)
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn collar_height(&self) -> f32 {
        self.collar_height
    }

    pub fn placement(&self) -> HolePlacement {
        self.placement
    }

    pub fn is_centered(&self) -> bool {
        self.placement.is_centered()
    }
}

/// The validated input to layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchRequest {
    title: String,
    panel_width: f32,
    panel_length: f32,
    turn_down: f32,
    drip_edge: bool,
    holes: Vec<HoleSpec>,
}

impl SketchRequest {
    /// Creates a request.
    ///
    /// # Arguments
    ///
    /// * `title` - Job name shown above the sketch
    /// * `panel_width` - Left-to-right panel dimension
    /// * `panel_length` - Front-to-back panel dimension
    /// * `turn_down` - Height of the lip formed at the front edge
    /// * `drip_edge` - Whether the turn-down is finished with a drip edge
    /// * `holes` - One or two holes, in display order
    pub fn new(
        title: impl Into<String>,
        panel_width: f32,
        panel_length: f32,
        turn_down: f32,
        drip_edge: bool,
        holes: Vec<HoleSpec>,
    ) -> Self {
        Self {
            title: title.into(),
            panel_width,
            panel_length,
            turn_down,
            drip_edge,
            holes,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    pub fn panel_length(&self) -> f32 {
        self.panel_length
    }

    pub fn turn_down(&self) -> f32 {
        self.turn_down
    }

    pub fn drip_edge(&self) -> bool {
        self.drip_edge
    }

    pub fn holes(&self) -> &[HoleSpec] {
        &self.holes
    }
}

/// A hole with its absolute panel-space center.
///
/// The center is not guaranteed to lie on the panel: offsets larger than the
/// panel are accepted and produce a center outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedHole {
    center: Point,
    spec: HoleSpec,
}

impl ResolvedHole {
    /// Pairs a resolved panel-space center with the specification it came from.
    pub fn new(center: Point, spec: HoleSpec) -> Self {
        Self { center, spec }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn center_x(&self) -> f32 {
        self.center.x()
    }

    pub fn center_y(&self) -> f32 {
        self.center.y()
    }

    pub fn diameter(&self) -> f32 {
        self.spec.diameter()
    }

    pub fn collar_height(&self) -> f32 {
        self.spec.collar_height()
    }

    /// Returns the placement the hole was requested with, kept for labelling.
    pub fn placement(&self) -> HolePlacement {
        self.spec.placement()
    }

    pub fn is_centered(&self) -> bool {
        self.spec.is_centered()
    }
}

/// A fully resolved sketch, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchLayout {
    title: String,
    panel_width: f32,
    panel_length: f32,
    turn_down: f32,
    drip_edge: bool,
    holes: Vec<ResolvedHole>,
}

impl SketchLayout {
    /// Creates a layout from the request's scalar fields and resolved holes.
    pub fn new(request: &SketchRequest, holes: Vec<ResolvedHole>) -> Self {
        Self {
            title: request.title.clone(),
            panel_width: request.panel_width,
            panel_length: request.panel_length,
            turn_down: request.turn_down,
            drip_edge: request.drip_edge,
            holes,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    pub fn panel_length(&self) -> f32 {
        self.panel_length
    }

    /// Returns the panel extents as a size (width by length).
    pub fn panel_size(&self) -> Size {
        Size::new(self.panel_width, self.panel_length)
    }

    pub fn turn_down(&self) -> f32 {
        self.turn_down
    }

    pub fn drip_edge(&self) -> bool {
        self.drip_edge
    }

    pub fn holes(&self) -> &[ResolvedHole] {
        &self.holes
    }
}
