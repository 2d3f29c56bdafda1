use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_scroll_lock::use_scroll_lock;
use crate::hooks::use_window_events::use_escape_key;
use crate::modal::{ModalAction, ModalContext, ModalState};

#[derive(Properties, PartialEq)]
pub struct ModalHostProps {
    pub children: Children,
}

/// Owns the modal state for everything beneath it, closes all open modals
/// on Escape and keeps the body scroll lock in sync.
#[function_component(ModalHost)]
pub fn modal_host(props: &ModalHostProps) -> Html {
    let modals = use_reducer(ModalState::default);

    {
        let modals = modals.clone();
        use_escape_key(Callback::from(move |_| modals.dispatch(ModalAction::Escape)));
    }
    use_scroll_lock(modals.scroll_locked());

    html! {
        <ContextProvider<ModalContext> context={modals}>
            { for props.children.iter() }
        </ContextProvider<ModalContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct InvestorCardProps {
    pub modal_id: AttrValue,
    pub icon: AttrValue,
    pub title: AttrValue,
    pub summary: AttrValue,
}

#[function_component(InvestorCard)]
pub fn investor_card(props: &InvestorCardProps) -> Html {
    let modals = use_context::<ModalContext>();

    let onclick = {
        let modal_id = props.modal_id.to_string();
        Callback::from(move |_: MouseEvent| {
            if let Some(modals) = &modals {
                modals.dispatch(ModalAction::Open(modal_id.clone()));
            }
        })
    };

    html! {
        <div class="investor-card" data-modal={props.modal_id.clone()} {onclick}>
            <div class="investor-card-icon">{&props.icon}</div>
            <h3>{&props.title}</h3>
            <p>{&props.summary}</p>
            <span class="investor-card-more">{"Learn more →"}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InvestorModalProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub children: Children,
}

fn is_exact_target(e: &MouseEvent, node: &NodeRef) -> bool {
    match (e.target(), node.get()) {
        (Some(target), Some(node)) => JsValue::from(target) == JsValue::from(node),
        _ => false,
    }
}

#[function_component(InvestorModal)]
pub fn investor_modal(props: &InvestorModalProps) -> Html {
    let modals = use_context::<ModalContext>();
    let backdrop = use_node_ref();

    {
        let modals = modals.clone();
        use_effect_with_deps(
            move |id: &AttrValue| {
                let id = id.to_string();
                if let Some(modals) = &modals {
                    modals.dispatch(ModalAction::Register(id.clone()));
                }
                move || {
                    if let Some(modals) = &modals {
                        modals.dispatch(ModalAction::Unregister(id));
                    }
                }
            },
            props.id.clone(),
        );
    }

    let is_open = modals.as_ref().map(|m| m.is_open(&props.id)).unwrap_or(false);

    let on_close = {
        let modals = modals.clone();
        let id = props.id.to_string();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(modals) = &modals {
                modals.dispatch(ModalAction::Close(id.clone()));
            }
        })
    };

    let on_backdrop = {
        let modals = modals.clone();
        let backdrop = backdrop.clone();
        let id = props.id.to_string();
        Callback::from(move |e: MouseEvent| {
            if let Some(modals) = &modals {
                modals.dispatch(ModalAction::BackdropClick {
                    id: id.clone(),
                    on_backdrop: is_exact_target(&e, &backdrop),
                });
            }
        })
    };

    html! {
        <div
            id={props.id.clone()}
            ref={backdrop}
            class={classes!("investor-modal", is_open.then(|| "active"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!is_open).to_string()}
            onclick={on_backdrop}
        >
            <div class="investor-modal-content">
                <button class="modal-close" aria-label="Close" onclick={on_close}>{"×"}</button>
                <h3>{&props.title}</h3>
                { for props.children.iter() }
            </div>
        </div>
    }
}
