use std::rc::Rc;
use yew::Reducible;

/// Where focus goes once an overlay closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusReturn {
    Trigger,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    Close,
    Escape,
}

/// Open/closed state of one overlay instance.
///
/// `transitions` only moves on a real open/close change, so effects keyed on
/// it never fire for the initial mount or for redundant actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub transitions: u32,
}

impl ModalState {
    pub fn apply(&mut self, action: ModalAction) {
        let open = match action {
            ModalAction::Open => true,
            ModalAction::Close | ModalAction::Escape => false,
        };
        if open != self.open {
            self.open = open;
            self.transitions += 1;
        }
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

/// Which element receives focus after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    CloseControl,
    Trigger,
    Unchanged,
}

/// Page-level side effects of one overlay transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Projection {
    pub lock_scroll: bool,
    pub focus: FocusTarget,
}

/// Side effects for an overlay that is now `open` after `transitions` changes.
/// `None` on mount, before anything has opened or closed.
pub fn projection(open: bool, transitions: u32, focus_return: FocusReturn) -> Option<Projection> {
    if transitions == 0 {
        return None;
    }
    let focus = match (open, focus_return) {
        (true, _) => FocusTarget::CloseControl,
        (false, FocusReturn::Trigger) => FocusTarget::Trigger,
        (false, FocusReturn::None) => FocusTarget::Unchanged,
    };
    Some(Projection {
        lock_scroll: open,
        focus,
    })
}

impl Reducible for ModalState {
    type Action = ModalAction;

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

    #[test]
    fn starts_closed_without_transitions() {
        let state = ModalState::default();
        assert!(!state.open);
        assert_eq!(state.transitions, 0);
        assert_eq!(state.aria_hidden(), "true");
    }

    #[test]
    fn open_then_escape_closes() {
        let state = Rc::new(ModalState::default());
        let state = state.reduce(ModalAction::Open);
        assert!(state.open);
        assert_eq!(state.aria_hidden(), "false");
        let state = state.reduce(ModalAction::Escape);
        assert!(!state.open);
        assert_eq!(state.transitions, 2);
    }

    #[test]
    fn escape_while_closed_is_ignored() {
        let state = Rc::new(ModalState::default());
        let next = state.clone().reduce(ModalAction::Escape);
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(next.transitions, 0);
    }

    #[test]
    fn reopening_an_open_overlay_does_not_stack() {
        let state = Rc::new(ModalState::default())
            .reduce(ModalAction::Open)
            .reduce(ModalAction::Open);
        assert!(state.open);
        assert_eq!(state.transitions, 1);
    }

    #[test]
    fn mount_touches_nothing() {
        let state = ModalState::default();
        assert_eq!(projection(state.open, state.transitions, FocusReturn::Trigger), None);
        assert_eq!(projection(state.open, state.transitions, FocusReturn::None), None);
    }

    #[test]
    fn opening_locks_and_focuses_close_control() {
        let state = Rc::new(ModalState::default()).reduce(ModalAction::Open);
        assert_eq!(
            projection(state.open, state.transitions, FocusReturn::None),
            Some(Projection {
                lock_scroll: true,
                focus: FocusTarget::CloseControl,
            })
        );
    }

    #[test]
    fn escape_close_returns_focus_to_trigger() {
        let state = Rc::new(ModalState::default())
            .reduce(ModalAction::Open)
            .reduce(ModalAction::Escape);
        assert_eq!(
            projection(state.open, state.transitions, FocusReturn::Trigger),
            Some(Projection {
                lock_scroll: false,
                focus: FocusTarget::Trigger,
            })
        );
    }

    #[test]
    fn escape_close_without_trigger_leaves_focus() {
        let state = Rc::new(ModalState::default())
            .reduce(ModalAction::Open)
            .reduce(ModalAction::Escape);
        assert_eq!(
            projection(state.open, state.transitions, FocusReturn::None),
            Some(Projection {
                lock_scroll: false,
                focus: FocusTarget::Unchanged,
            })
        );
    }
}
