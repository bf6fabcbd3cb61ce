use yew::prelude::*;

use super::models::{FocusReturn, ModalAction, ModalState};
use super::{use_escape, use_modal_projection};
use crate::utils::scroll_lock::LockHolder;

#[derive(Properties, PartialEq)]
pub struct InfoModalProps {
    pub badge_label: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Badge that opens a static informational overlay.
///
/// Unlike the project overlay, closing hands focus back to the badge.
#[function_component]
pub fn InfoModal(props: &InfoModalProps) -> Html {
    let state = use_reducer(ModalState::default);
    let badge_ref = use_node_ref();
    let close_ref = use_node_ref();

    use_modal_projection(
        *state,
        close_ref.clone(),
        badge_ref.clone(),
        FocusReturn::Trigger,
        LockHolder::InfoModal,
    );

    {
        let state = state.clone();
        use_escape(Callback::from(move |_| state.dispatch(ModalAction::Escape)));
    }

    let on_open = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ModalAction::Open))
    };
    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ModalAction::Close))
    };

    html! {
        <>
            <button
                id="infoBadge"
                class="info-badge"
                type="button"
                ref={badge_ref}
                aria-haspopup="dialog"
                onclick={on_open}
            >
                {props.badge_label.clone()}
            </button>
            <div
                id="infoModal"
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="infoModalTitle"
                aria-hidden={state.aria_hidden()}
            >
                <div class="modal-overlay" onclick={on_close.clone()}></div>
                <div class="modal-content">
                    <button
                        class="modal-close"
                        type="button"
                        aria-label="Fechar"
                        ref={close_ref}
                        onclick={on_close}
                    >
                        {"×"}
                    </button>
                    <h3 id="infoModalTitle" class="modal-title">{props.title.clone()}</h3>
                    <div class="modal-body">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </>
    }
}
