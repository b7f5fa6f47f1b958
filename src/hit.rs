//! Pointer hit-testing against element bounding boxes
//!
//! Hit areas are the axis-aligned, unrotated element boxes. A rotated element
//! therefore stays clickable where it would sit at 0°, not where it is drawn.

use crate::geometry::{Point, Size};
use crate::model::LabelElement;

/// Map a surface-relative pointer position to label millimeters.
///
/// `displayed` is the on-screen size of the surface. The result is independent of
/// zoom because the displayed size tracks the logical size, not the device size.
/// A degenerate displayed axis maps one-to-one.
pub fn to_logical(pointer: Point, logical: Size, displayed: Size) -> Point {
    Point::new(
        rescale(pointer.x, logical.width, displayed.width),
        rescale(pointer.y, logical.height, displayed.height),
    )
}

fn rescale(value: f64, logical: f64, displayed: f64) -> f64 {
    if displayed.is_finite() && displayed > 0.0 {
        value * logical / displayed
    } else {
        value
    }
}

/// First element, in insertion order, whose box contains `point` (millimeters)
pub fn element_at(elements: &[LabelElement], point: Point) -> Option<&LabelElement> {
    elements.iter().find(|e| e.bounds().contains(point))
}

/// Resolve a pointer event to the element it lands on
pub fn hit_test(
    elements: &[LabelElement],
    pointer: Point,
    logical: Size,
    displayed: Size,
) -> Option<&LabelElement> {
    element_at(elements, to_logical(pointer, logical, displayed))
}
