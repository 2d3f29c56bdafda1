use yew::prelude::*;

/// Sets or clears `overflow: hidden` on the document body.
pub fn set_body_scroll_lock(locked: bool) {
    let body = match web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => body,
        None => return,
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

/// Keeps the body scroll lock equal to `locked`. Released on unmount.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            let locked = *locked;
            set_body_scroll_lock(locked);
            move || {
                if locked {
                    set_body_scroll_lock(false);
                }
            }
        },
        locked,
    );
}
