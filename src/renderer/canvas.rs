//! A viewport that may or may not have a drawing surface attached yet

use tracing::debug;

use crate::config::RenderConfig;
use crate::geometry::Point;
use crate::hit;
use crate::model::{LabelElement, LabelTemplate};
use crate::view::ViewState;

use super::draw;
use super::surface::Surface;

/// Holds the surface a host attaches once its drawing area exists
#[derive(Debug, Clone)]
pub struct LabelCanvas<S> {
    surface: Option<S>,
}

impl<S> Default for LabelCanvas<S> {
    fn default() -> Self {
        Self { surface: None }
    }
}

impl<S: Surface> LabelCanvas<S> {
    /// A canvas with no surface attached
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface(surface: S) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Attach a surface, returning the one it replaces
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Repaint the template. Without a surface this does nothing and returns false.
    pub fn render(
        &mut self,
        template: &LabelTemplate,
        view: &ViewState,
        config: &RenderConfig,
    ) -> bool {
        match self.surface.as_mut() {
            Some(surface) => {
                draw::render(surface, template, view, config);
                true
            }
            None => {
                debug!("render skipped: no surface attached");
                false
            }
        }
    }

    /// Element under a surface-relative pointer position, using the surface's
    /// displayed size for the coordinate mapping
    pub fn hit_test<'t>(
        &self,
        template: &'t LabelTemplate,
        pointer: Point,
    ) -> Option<&'t LabelElement> {
        let surface = self.surface.as_ref()?;
        hit::hit_test(
            template.elements(),
            pointer,
            template.size(),
            surface.display_size(),
        )
    }
}
