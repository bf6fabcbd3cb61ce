pub mod info_modal;
pub mod models;

use yew::prelude::*;

use crate::utils::dom;
use crate::utils::scroll_lock::{self, LockHolder};
use models::{projection, FocusReturn, FocusTarget, ModalState};

/// Projects an overlay's state onto the page: scroll lock and focus.
///
/// Runs only on real transitions, never on mount.
#[hook]
pub fn use_modal_projection(
    state: ModalState,
    close_ref: NodeRef,
    trigger_ref: NodeRef,
    focus_return: FocusReturn,
    holder: LockHolder,
) {
    use_effect_with_deps(
        move |(open, transitions)| {
            if let Some(effects) = projection(*open, *transitions, focus_return) {
                scroll_lock::set_scroll_locked(holder, effects.lock_scroll);
                match effects.focus {
                    FocusTarget::CloseControl => dom::focus(&close_ref),
                    FocusTarget::Trigger => dom::focus(&trigger_ref),
                    FocusTarget::Unchanged => {}
                }
            }
            || ()
        },
        (state.open, state.transitions),
    );
}

/// Registers a document-level Escape handler for the lifetime of the component.
#[hook]
pub fn use_escape(on_escape: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let listener = dom::on_escape(move || on_escape.emit(()));
            move || drop(listener)
        },
        (),
    );
}
