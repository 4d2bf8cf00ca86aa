use crate::{
    bindings::{ControlsPlacement, ViewerUi},
    Logger,
};

/// Keeps track of where the controls panel is displayed and of whether it can be fully shown
/// without scrolling.
///
/// The placement is the source of truth: the DOM is only updated as a consequence of a
/// transition.
pub(crate) struct ControlsVisibilityController {
    placement: ControlsPlacement,

    /// Last "fits without scrolling" verdict applied to the page.
    ///
    /// `None` if never computed.
    fits_without_scrolling: Option<bool>,

    /// Set when the viewport changed while the panel was docked: the new layout will only be
    /// considered once the panel is collapsed again.
    pending_update: bool,
}

impl ControlsVisibilityController {
    pub(crate) fn new() -> Self {
        Self {
            placement: ControlsPlacement::Collapsed,
            fits_without_scrolling: None,
            pending_update: false,
        }
    }

    pub(crate) fn placement(&self) -> ControlsPlacement {
        self.placement
    }

    pub(crate) fn fits_without_scrolling(&self) -> Option<bool> {
        self.fits_without_scrolling
    }

    pub(crate) fn has_pending_update(&self) -> bool {
        self.pending_update
    }

    /// Show more of the controls: `Collapsed` -> `DockedExpanded` -> `FloatingFullyExpanded`.
    pub(crate) fn expand<P: ViewerUi + ?Sized>(&mut self, page: &mut P) {
        let next = match self.placement {
            ControlsPlacement::Collapsed => ControlsPlacement::DockedExpanded,
            ControlsPlacement::DockedExpanded => ControlsPlacement::FloatingFullyExpanded,
            ControlsPlacement::FloatingFullyExpanded => return,
        };
        self.transition(page, next);
    }

    /// Show less of the controls: `FloatingFullyExpanded` -> `DockedExpanded` -> `Collapsed`.
    ///
    /// Going back to `Collapsed` applies a layout update deferred while docked, if one.
    pub(crate) fn collapse<P: ViewerUi + ?Sized>(&mut self, page: &mut P) {
        let next = match self.placement {
            ControlsPlacement::FloatingFullyExpanded => ControlsPlacement::DockedExpanded,
            ControlsPlacement::DockedExpanded => ControlsPlacement::Collapsed,
            ControlsPlacement::Collapsed => return,
        };
        self.transition(page, next);
        if next == ControlsPlacement::Collapsed && self.pending_update {
            self.pending_update = false;
            self.update_controls(page);
        }
    }

    /// Method to call on load and each time the viewport is resized.
    ///
    /// Checks whether the controls region fits in the viewport and, if that verdict changed,
    /// toggles the marker suppressing the compact mode. While docked, this is deferred until the
    /// panel is collapsed, as changing the layout under an open panel would make it jump.
    pub(crate) fn update_controls<P: ViewerUi + ?Sized>(&mut self, page: &mut P) {
        if self.placement == ControlsPlacement::DockedExpanded {
            Logger::debug("Controls: panel docked, deferring layout update");
            self.pending_update = true;
            return;
        }
        let fits = page.controls_layout().fits_in_viewport();
        if self.fits_without_scrolling != Some(fits) {
            Logger::debug(&format!("Controls: fits without scrolling: {fits}"));
            self.fits_without_scrolling = Some(fits);
            page.set_compact_mode_suppressed(fits);
        }
    }

    /// Push the current placement to the page, e.g. at start-up.
    pub(crate) fn apply_placement<P: ViewerUi + ?Sized>(&self, page: &mut P) {
        page.set_controls_placement(self.placement);
    }

    /// Enter fullscreen mode if not already in it, exit it otherwise.
    pub(crate) fn toggle_fullscreen<P: ViewerUi + ?Sized>(&self, page: &mut P) {
        let fullscreen = page.is_fullscreen();
        page.set_fullscreen(!fullscreen);
    }

    fn transition<P: ViewerUi + ?Sized>(&mut self, page: &mut P, next: ControlsPlacement) {
        Logger::debug(&format!("Controls: {:?} -> {:?}", self.placement, next));
        self.placement = next;
        page.set_controls_placement(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{test_support::FakePage, ControlsLayout};

    #[test]
    fn test_expand_and_collapse() {
        let mut page = FakePage::new();
        let mut controls = ControlsVisibilityController::new();
        assert_eq!(controls.placement(), ControlsPlacement::Collapsed);

        controls.expand(&mut page);
        assert_eq!(controls.placement(), ControlsPlacement::DockedExpanded);
        controls.expand(&mut page);
        assert_eq!(controls.placement(), ControlsPlacement::FloatingFullyExpanded);
        controls.expand(&mut page);
        assert_eq!(controls.placement(), ControlsPlacement::FloatingFullyExpanded);

        controls.collapse(&mut page);
        assert_eq!(controls.placement(), ControlsPlacement::DockedExpanded);
        controls.collapse(&mut page);
        assert_eq!(controls.placement(), ControlsPlacement::Collapsed);
        controls.collapse(&mut page);
        assert_eq!(controls.placement(), ControlsPlacement::Collapsed);

        // no-op transitions are not pushed to the page
        assert_eq!(
            page.state().placements,
            vec![
                ControlsPlacement::DockedExpanded,
                ControlsPlacement::FloatingFullyExpanded,
                ControlsPlacement::DockedExpanded,
                ControlsPlacement::Collapsed,
            ]
        );
    }

    #[test]
    fn test_expand_then_collapse_twice_returns_to_collapsed() {
        let mut page = FakePage::new();
        let mut controls = ControlsVisibilityController::new();
        controls.expand(&mut page);
        controls.collapse(&mut page);
        controls.collapse(&mut page);
        assert_eq!(controls.placement(), ControlsPlacement::Collapsed);
        assert_eq!(page.state().placements.last(), Some(&ControlsPlacement::Collapsed));
    }

    #[test]
    fn test_update_controls_toggles_marker_only_on_change() {
        let mut page = FakePage::new();
        let mut controls = ControlsVisibilityController::new();
        page.state().layout = ControlsLayout::new(100., 300., 800.);
        controls.update_controls(&mut page);
        controls.update_controls(&mut page);
        assert_eq!(controls.fits_without_scrolling(), Some(true));
        assert_eq!(page.state().compact_mode_suppressed, vec![true]);

        page.state().layout = ControlsLayout::new(600., 300., 800.);
        controls.update_controls(&mut page);
        assert_eq!(controls.fits_without_scrolling(), Some(false));
        assert_eq!(page.state().compact_mode_suppressed, vec![true, false]);

        // update does not change the placement
        assert_eq!(controls.placement(), ControlsPlacement::Collapsed);
        assert!(page.state().placements.is_empty());
    }

    #[test]
    fn test_layout_bounds() {
        assert!(ControlsLayout::new(0., 800., 800.).fits_in_viewport());
        assert!(!ControlsLayout::new(-1., 100., 800.).fits_in_viewport());
        assert!(!ControlsLayout::new(1., 800., 800.).fits_in_viewport());
    }

    #[test]
    fn test_update_deferred_while_docked() {
        let mut page = FakePage::new();
        let mut controls = ControlsVisibilityController::new();
        page.state().layout = ControlsLayout::new(0., 300., 800.);
        controls.update_controls(&mut page);
        assert_eq!(page.state().compact_mode_suppressed, vec![true]);

        controls.expand(&mut page);
        page.state().layout = ControlsLayout::new(0., 300., 200.);
        controls.update_controls(&mut page);
        assert!(controls.has_pending_update());
        assert_eq!(page.state().compact_mode_suppressed, vec![true]);

        controls.collapse(&mut page);
        assert!(!controls.has_pending_update());
        assert_eq!(controls.fits_without_scrolling(), Some(false));
        assert_eq!(page.state().compact_mode_suppressed, vec![true, false]);
    }

    #[test]
    fn test_update_applied_while_floating() {
        let mut page = FakePage::new();
        let mut controls = ControlsVisibilityController::new();
        controls.expand(&mut page);
        controls.expand(&mut page);
        page.state().layout = ControlsLayout::new(0., 300., 200.);
        controls.update_controls(&mut page);
        assert!(!controls.has_pending_update());
        assert_eq!(page.state().compact_mode_suppressed, vec![false]);
    }

    #[test]
    fn test_pending_update_survives_going_floating() {
        let mut page = FakePage::new();
        let mut controls = ControlsVisibilityController::new();
        controls.expand(&mut page);
        controls.update_controls(&mut page);
        controls.expand(&mut page);
        controls.collapse(&mut page);
        assert!(controls.has_pending_update());
        controls.collapse(&mut page);
        assert!(!controls.has_pending_update());
        assert_eq!(page.state().compact_mode_suppressed, vec![true]);
    }

    #[test]
    fn test_toggle_fullscreen() {
        let mut page = FakePage::new();
        let controls = ControlsVisibilityController::new();
        controls.toggle_fullscreen(&mut page);
        assert!(page.state().fullscreen);
        controls.toggle_fullscreen(&mut page);
        assert!(!page.state().fullscreen);
    }
}
