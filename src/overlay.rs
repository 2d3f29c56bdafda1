use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Hidden,
    Visible,
    Leaving,
}

/// Tracks the single confirmation overlay.
///
/// Every `Show` bumps `generation`; timers carry the generation they were
/// armed for, so a timer left over from an earlier show can't dismiss a
/// newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayState {
    pub phase: OverlayPhase,
    pub generation: u64,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            phase: OverlayPhase::Hidden,
            generation: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    Show,
    BeginDismiss(u64),
    Remove(u64),
}

impl OverlayState {
    pub fn is_mounted(&self) -> bool {
        self.phase != OverlayPhase::Hidden
    }

    pub fn apply(&mut self, action: OverlayAction) {
        match action {
            // Re-showing keeps one overlay and re-arms its timer.
            OverlayAction::Show => {
                self.generation += 1;
                self.phase = OverlayPhase::Visible;
            }
            OverlayAction::BeginDismiss(generation) => {
                if generation == self.generation && self.phase == OverlayPhase::Visible {
                    self.phase = OverlayPhase::Leaving;
                }
            }
            OverlayAction::Remove(generation) => {
                if generation == self.generation && self.phase == OverlayPhase::Leaving {
                    self.phase = OverlayPhase::Hidden;
                }
            }
        }
    }
}

impl Reducible for OverlayState {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIRMATION_DISMISS_MS, CONFIRMATION_LEAVE_MS};

    #[test]
    fn show_dismiss_remove() {
        let mut overlay = OverlayState::default();
        assert!(!overlay.is_mounted());
        overlay.apply(OverlayAction::Show);
        assert_eq!(overlay.phase, OverlayPhase::Visible);
        let generation = overlay.generation;
        overlay.apply(OverlayAction::BeginDismiss(generation));
        assert_eq!(overlay.phase, OverlayPhase::Leaving);
        overlay.apply(OverlayAction::Remove(generation));
        assert_eq!(overlay.phase, OverlayPhase::Hidden);
    }

    #[test]
    fn second_show_does_not_stack() {
        let mut overlay = OverlayState::default();
        overlay.apply(OverlayAction::Show);
        let first = overlay.generation;
        overlay.apply(OverlayAction::Show);
        assert_eq!(overlay.phase, OverlayPhase::Visible);

        // The first timer fires late and must not dismiss the re-shown overlay.
        overlay.apply(OverlayAction::BeginDismiss(first));
        assert_eq!(overlay.phase, OverlayPhase::Visible);

        overlay.apply(OverlayAction::BeginDismiss(overlay.generation));
        assert_eq!(overlay.phase, OverlayPhase::Leaving);
    }

    #[test]
    fn show_while_leaving_revives_overlay() {
        let mut overlay = OverlayState::default();
        overlay.apply(OverlayAction::Show);
        let first = overlay.generation;
        overlay.apply(OverlayAction::BeginDismiss(first));
        overlay.apply(OverlayAction::Show);
        overlay.apply(OverlayAction::Remove(first));
        assert_eq!(overlay.phase, OverlayPhase::Visible);
    }

    #[test]
    fn remove_requires_leaving_phase() {
        let mut overlay = OverlayState::default();
        overlay.apply(OverlayAction::Show);
        overlay.apply(OverlayAction::Remove(overlay.generation));
        assert_eq!(overlay.phase, OverlayPhase::Visible);
    }

    #[test]
    fn overlay_lifetime_fits_the_dismiss_window() {
        assert_eq!(CONFIRMATION_DISMISS_MS, 3_000);
        assert!(CONFIRMATION_DISMISS_MS + CONFIRMATION_LEAVE_MS <= 5_000);
    }
}
