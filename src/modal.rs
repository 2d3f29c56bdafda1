use std::collections::BTreeSet;
use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
    /// A modal element mounted with this id.
    Register(String),
    Unregister(String),
    /// A trigger referencing this id was activated.
    Open(String),
    /// The modal's close control was activated.
    Close(String),
    /// Pointer event on the modal's backdrop. Only closes when the event
    /// target is the backdrop itself, not something inside it.
    BackdropClick { id: String, on_backdrop: bool },
    /// Global escape key: closes every open modal.
    Escape,
}

/// Open/closed state for every modal on the page plus the derived scroll lock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    known: BTreeSet<String>,
    open: BTreeSet<String>,
}

impl ModalState {
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    #[cfg(test)]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Background scrolling is locked iff at least one modal is open.
    pub fn scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn apply(&mut self, action: ModalAction) {
        match action {
            ModalAction::Register(id) => {
                self.known.insert(id);
            }
            ModalAction::Unregister(id) => {
                self.open.remove(&id);
                self.known.remove(&id);
            }
            ModalAction::Open(id) => {
                if self.known.contains(&id) {
                    self.open.insert(id);
                } else {
                    log::debug!("No modal registered for id {}", id);
                }
            }
            ModalAction::Close(id) => {
                self.open.remove(&id);
            }
            ModalAction::BackdropClick { id, on_backdrop } => {
                if on_backdrop {
                    self.open.remove(&id);
                }
            }
            ModalAction::Escape => {
                if !self.open.is_empty() {
                    log::debug!("Escape closing {} modal(s)", self.open.len());
                }
                self.open.clear();
            }
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub type ModalContext = UseReducerHandle<ModalState>;
