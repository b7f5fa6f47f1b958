//! Mutation API over a template's design, plus the selection kept beside it
//!
//! Every operation is total: an id that does not match any element turns the call
//! into a no-op. A host control may still reference an element whose deletion has
//! not reached it yet.

use tracing::debug;

use crate::geometry::{Point, Size};
use crate::hit;
use crate::model::{ElementId, ElementKind, ElementPatch, LabelElement, LabelTemplate};
use crate::view::{ViewState, Zoom};

/// Offset in millimeters applied to duplicated elements
pub const DUPLICATE_OFFSET_MM: f64 = 10.0;

/// The single writer of a [`LabelTemplate`]'s design
#[derive(Debug, Clone, Default)]
pub struct LabelDesigner {
    template: LabelTemplate,
    view: ViewState,
}

impl LabelDesigner {
    pub fn new(template: LabelTemplate) -> Self {
        Self {
            template,
            view: ViewState::default(),
        }
    }

    pub fn template(&self) -> &LabelTemplate {
        &self.template
    }

    pub fn into_template(self) -> LabelTemplate {
        self.template
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Elements in insertion order
    pub fn elements(&self) -> &[LabelElement] {
        self.template.elements()
    }

    pub fn element(&self, id: &ElementId) -> Option<&LabelElement> {
        self.template.element(id)
    }

    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.view.zoom = zoom;
    }

    /// Change the physical label size. Values are clamped when saved, not here.
    pub fn resize_label(&mut self, width: f64, height: f64) {
        self.template.width = width;
        self.template.height = height;
    }

    pub fn selected(&self) -> Option<&ElementId> {
        self.view.selected.as_ref()
    }

    /// The selected element, if the selection still points at one
    pub fn selected_element(&self) -> Option<&LabelElement> {
        self.view
            .selected
            .as_ref()
            .and_then(|id| self.template.element(id))
    }

    /// Select an element by id. Returns false (and leaves the selection alone)
    /// if no such element exists.
    pub fn select(&mut self, id: &ElementId) -> bool {
        if self.template.position_of(id).is_none() {
            debug!(%id, "select ignored: no such element");
            return false;
        }
        self.view.selected = Some(id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.view.selected = None;
    }

    /// Hit-test a pointer position and select the element under it, or clear the
    /// selection on a miss.
    pub fn select_at(&mut self, pointer: Point, displayed: Size) -> Option<ElementId> {
        let hit = hit::hit_test(
            self.template.elements(),
            pointer,
            self.template.size(),
            displayed,
        )
        .map(|e| e.id.clone());
        self.view.selected = hit.clone();
        hit
    }

    /// Append a new element of `kind` on top of the others and select it
    pub fn add(&mut self, kind: ElementKind) -> LabelElement {
        let element = LabelElement::new(kind).with_z_index(self.next_z_index());
        debug!(id = %element.id, %kind, z_index = element.z_index, "element added");
        self.template.design.push(element.clone());
        self.view.selected = Some(element.id.clone());
        element
    }

    /// Merge `patch` into the element with `id`
    pub fn update(&mut self, id: &ElementId, patch: &ElementPatch) {
        match self.template.design.iter_mut().find(|e| &e.id == id) {
            Some(element) => patch.apply(element),
            None => debug!(%id, "update ignored: no such element"),
        }
    }

    /// Remove the element with `id`, clearing the selection if it pointed there
    pub fn delete(&mut self, id: &ElementId) {
        let Some(index) = self.template.position_of(id) else {
            debug!(%id, "delete ignored: no such element");
            return;
        };
        self.template.design.remove(index);
        if self.view.is_selected(id) {
            self.view.selected = None;
        }
    }

    /// Copy the element with `id`, offset by 10mm on both axes, on top of the others.
    /// The copy becomes the selection.
    pub fn duplicate(&mut self, id: &ElementId) -> Option<LabelElement> {
        let Some(source) = self.template.element(id) else {
            debug!(%id, "duplicate ignored: no such element");
            return None;
        };
        let mut copy = source.clone();
        copy.id = ElementId::generate();
        copy.position = source
            .position
            .offset(DUPLICATE_OFFSET_MM, DUPLICATE_OFFSET_MM);
        copy.z_index = self.next_z_index();

        self.template.design.push(copy.clone());
        self.view.selected = Some(copy.id.clone());
        Some(copy)
    }

    fn next_z_index(&self) -> i64 {
        i64::try_from(self.template.len()).unwrap_or(i64::MAX)
    }
}

impl From<LabelTemplate> for LabelDesigner {
    fn from(template: LabelTemplate) -> Self {
        Self::new(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_assigns_count_as_z_index_and_selects() {
        let mut designer = LabelDesigner::default();
        for n in 0..4 {
            let element = designer.add(ElementKind::Circle);
            assert_eq!(element.z_index, n);
            assert_eq!(designer.selected(), Some(&element.id));
        }
        assert_eq!(designer.elements().len(), 4);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut designer = LabelDesigner::default();
        designer.add(ElementKind::Text);
        let before = designer.template().clone();
        designer.update(&ElementId::new("ghost"), &ElementPatch::new().content("x"));
        assert_eq!(designer.template(), &before);
    }

    #[test]
    fn test_delete_clears_selection_only_when_selected() {
        let mut designer = LabelDesigner::default();
        let a = designer.add(ElementKind::Text);
        let b = designer.add(ElementKind::Line);

        designer.delete(&a.id);
        assert_eq!(designer.selected(), Some(&b.id));

        designer.delete(&b.id);
        assert_eq!(designer.selected(), None);
        assert!(designer.elements().is_empty());

        designer.delete(&b.id);
        assert!(designer.elements().is_empty());
    }

    #[test]
    fn test_duplicate_offsets_and_restacks() {
        let mut designer = LabelDesigner::default();
        let original = designer.add(ElementKind::Rectangle);
        designer.update(&original.id, &ElementPatch::new().position(5.0, 7.0));
        designer.add(ElementKind::Qr);

        let copy = designer.duplicate(&original.id).unwrap();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.position, Point::new(15.0, 17.0));
        assert_eq!(copy.z_index, 2);
        assert_eq!(copy.kind, ElementKind::Rectangle);
        assert_eq!(designer.selected(), Some(&copy.id));
        assert_eq!(designer.elements().len(), 3);
    }

    #[test]
    fn test_duplicate_unknown_returns_none() {
        let mut designer = LabelDesigner::default();
        designer.add(ElementKind::Text);
        assert!(designer.duplicate(&ElementId::new("ghost")).is_none());
        assert_eq!(designer.elements().len(), 1);
    }

    #[test]
    fn test_select_at_hits_and_clears() {
        let mut designer = LabelDesigner::default();
        let element = designer.add(ElementKind::Rectangle);
        designer.clear_selection();

        let displayed = designer.template().size();
        assert_eq!(
            designer.select_at(Point::new(20.0, 20.0), displayed),
            Some(element.id.clone())
        );
        assert_eq!(designer.selected_element().map(|e| &e.id), Some(&element.id));

        assert_eq!(designer.select_at(Point::new(1.0, 1.0), displayed), None);
        assert_eq!(designer.selected(), None);
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut designer = LabelDesigner::default();
        let element = designer.add(ElementKind::Text);
        assert!(!designer.select(&ElementId::new("ghost")));
        assert_eq!(designer.selected(), Some(&element.id));
    }
}
