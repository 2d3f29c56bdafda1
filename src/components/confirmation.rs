use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{CONFIRMATION_DISMISS_MS, CONFIRMATION_LEAVE_MS};
use crate::overlay::{OverlayAction, OverlayPhase, OverlayState};

#[derive(Properties, PartialEq)]
pub struct ConfirmationOverlayProps {
    pub state: OverlayState,
    pub on_action: Callback<OverlayAction>,
}

/// Transient "submitted" message. Animates in, leaves after
/// [`CONFIRMATION_DISMISS_MS`] and unmounts once the leave animation is over.
#[function_component(ConfirmationOverlay)]
pub fn confirmation_overlay(props: &ConfirmationOverlayProps) -> Html {
    {
        let on_action = props.on_action.clone();
        use_effect_with_deps(
            move |(phase, generation): &(OverlayPhase, u64)| {
                let generation = *generation;
                let timeout = match phase {
                    OverlayPhase::Visible => Some(Timeout::new(CONFIRMATION_DISMISS_MS, move || {
                        on_action.emit(OverlayAction::BeginDismiss(generation));
                    })),
                    OverlayPhase::Leaving => Some(Timeout::new(CONFIRMATION_LEAVE_MS, move || {
                        on_action.emit(OverlayAction::Remove(generation));
                    })),
                    OverlayPhase::Hidden => None,
                };
                // dropping cancels
                move || drop(timeout)
            },
            (props.state.phase, props.state.generation),
        );
    }

    if !props.state.is_mounted() {
        return html! {};
    }

    let phase_class = match props.state.phase {
        OverlayPhase::Leaving => "leaving",
        _ => "entering",
    };

    html! {
        <div class={classes!("success-message", phase_class)} role="status" aria-live="polite">
            <style>
                {r#"
                    .success-message {
                        position: fixed;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        z-index: 9999;
                        background: rgba(19, 26, 34, 0.95);
                        border: 1px solid rgba(80, 227, 194, 0.2);
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
                        padding: 24px 28px;
                        border-radius: 16px;
                        text-align: center;
                        color: #e6f4f1;
                        backdrop-filter: blur(8px);
                    }
                    .success-message.entering {
                        animation: successIn 0.3s ease-out forwards;
                    }
                    .success-message.leaving {
                        animation: successOut 0.2s ease-in forwards;
                    }
                    @keyframes successIn {
                        from { opacity: 0; transform: translate(-50%, -50%) scale(0.9); }
                        to { opacity: 1; transform: translate(-50%, -50%) scale(1); }
                    }
                    @keyframes successOut {
                        from { opacity: 1; transform: translate(-50%, -50%) scale(1); }
                        to { opacity: 0; transform: translate(-50%, -50%) scale(0.95); }
                    }
                    .success-icon {
                        font-size: 3rem;
                        color: var(--spark-cyan);
                        margin-bottom: 1rem;
                    }
                    .success-content h3 {
                        color: var(--cold-white);
                        margin-bottom: 1rem;
                        font-family: var(--font-primary);
                    }
                    .success-content p {
                        color: var(--steel-silver);
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="success-content">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Investment Interest Submitted"}</h3>
                <p>{"Thank you for your interest in Valkyrie Revival Fund. Our team will contact you within 24 hours."}</p>
            </div>
        </div>
    }
}
