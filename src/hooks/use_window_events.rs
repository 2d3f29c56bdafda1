use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::feed::is_mobile_width;

/// Emits on every Escape keydown anywhere in the page.
#[hook]
pub fn use_escape_key(on_escape: Callback<()>) {
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            on_escape.emit(());
        }
    });
}

fn current_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Whether the viewport is at or below the mobile breakpoint, re-evaluated on resize.
#[hook]
pub fn use_is_mobile() -> bool {
    let is_mobile = use_state(|| current_width().map(is_mobile_width).unwrap_or(false));
    {
        let is_mobile = is_mobile.clone();
        use_event_with_window("resize", move |_: web_sys::Event| {
            if let Some(width) = current_width() {
                is_mobile.set(is_mobile_width(width));
            }
        });
    }
    *is_mobile
}

/// True once the window has scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let window = web_sys::window();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_top > threshold);
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            threshold,
        );
    }

    *is_scrolled
}
