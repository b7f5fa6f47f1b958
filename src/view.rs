//! Per-viewport state kept beside the template: zoom and selection

use crate::geometry::{BoundingBox, Size};
use crate::model::ElementId;

/// Zoom percentage, always a multiple of [`Zoom::STEP`] within `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zoom(u16);

impl Zoom {
    pub const MIN: u16 = 25;
    pub const MAX: u16 = 200;
    pub const STEP: u16 = 25;

    /// Clamp `percent` into range and snap it to the nearest step
    pub fn new(percent: u16) -> Self {
        let clamped = percent.clamp(Self::MIN, Self::MAX);
        let snapped = (clamped + Self::STEP / 2) / Self::STEP * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    pub fn percent(&self) -> u16 {
        self.0
    }

    /// Device pixels per millimeter
    pub fn scale(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn zoom_in(&self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn zoom_out(&self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(100)
    }
}

/// View state for one viewport.
///
/// The main canvas and a preview each own their own `ViewState` while sharing
/// the same template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub zoom: Zoom,
    pub selected: Option<ElementId>,
}

impl ViewState {
    pub fn new(zoom: Zoom) -> Self {
        Self {
            zoom,
            selected: None,
        }
    }

    pub fn with_selected(mut self, id: Option<ElementId>) -> Self {
        self.selected = id;
        self
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}

/// Coordinate-space mapping for a label drawn at a given zoom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMetrics {
    /// Label size in millimeters
    pub logical: Size,
    pub scale: f64,
}

impl CanvasMetrics {
    pub fn new(logical: Size, zoom: Zoom) -> Self {
        Self {
            logical,
            scale: zoom.scale(),
        }
    }

    /// Backing-store size in device pixels
    pub fn device_size(&self) -> Size {
        self.logical.scale(self.scale)
    }

    /// On-screen size: one display pixel per millimeter regardless of zoom
    pub fn display_size(&self) -> Size {
        self.logical
    }

    /// Millimeter box to device pixels
    pub fn to_device(&self, bounds: BoundingBox) -> BoundingBox {
        bounds.scale(self.scale)
    }
}
