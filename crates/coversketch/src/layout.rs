//! Resolution of hole placement rules into panel-space coordinates.
//!
//! Offsets are measured from the chosen edge to the nearest point of the
//! hole, so the center sits half a diameter further in. Nothing here clamps:
//! an offset larger than the panel yields a center outside it, and that
//! layout is rendered as-is.

use log::{debug, trace};

use coversketch_core::{
    geometry::Point,
    sketch::{
        HolePlacement, HoleSpec, ResolvedHole, SketchLayout, SketchRequest, XDirection, YDirection,
    },
};

/// Resolves one hole against a panel of the given dimensions.
pub fn resolve_hole(panel_width: f32, panel_length: f32, spec: HoleSpec) -> ResolvedHole {
    let radius = spec.diameter() / 2.0;

    let center = match spec.placement() {
        HolePlacement::Centered => Point::new(panel_width / 2.0, panel_length / 2.0),
        HolePlacement::Offset {
            x_direction,
            x_offset,
            y_direction,
            y_offset,
        } => {
            let x = match x_direction {
                XDirection::FromLeft => x_offset + radius,
                XDirection::FromRight => panel_width - x_offset - radius,
            };
            let y = match y_direction {
                YDirection::FromFront => y_offset + radius,
                YDirection::FromBack => panel_length - y_offset - radius,
            };
            Point::new(x, y)
        }
    };

    trace!(center_x = center.x(), center_y = center.y(); "Resolved hole");

    ResolvedHole::new(center, spec)
}

/// Builds the layout for a request, resolving every hole in order.
pub fn build_layout(request: &SketchRequest) -> SketchLayout {
    let holes: Vec<ResolvedHole> = request
        .holes()
        .iter()
        .map(|spec| resolve_hole(request.panel_width(), request.panel_length(), *spec))
        .collect();

    debug!(
        panel_width = request.panel_width(),
        panel_length = request.panel_length(),
        holes_count = holes.len();
        "Layout built"
    );

    SketchLayout::new(request, holes)
}
