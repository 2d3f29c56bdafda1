use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::{RevealKey, RevealOptions, RevealScheduler, REVEAL_CLASS, REVEAL_KEY_ATTR};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Registers every element matching `selector` for a one-shot reveal.
///
/// Runs once after mount, so all targets are in the DOM before the observer
/// starts reporting. The observer is disconnected on unmount.
#[hook]
pub fn use_reveal(selector: &'static str, options: RevealOptions) {
    use_effect_with_deps(
        move |_| {
            let observer = observe_reveals(selector, &options);
            move || {
                if let Some((observer, callback)) = observer {
                    observer.disconnect();
                    drop(callback);
                }
            }
        },
        (),
    );
}

/// Handles one observer report for `target`. Returns true when the element
/// was just revealed, meaning its subscription is spent and it should be
/// unobserved.
fn reveal_target(scheduler: &mut RevealScheduler, target: &Element, is_intersecting: bool, ratio: f64) -> bool {
    let key = match target.get_attribute(REVEAL_KEY_ATTR).and_then(|k| RevealKey::parse(&k)) {
        Some(key) => key,
        None => return false,
    };
    match scheduler.on_intersection(key, is_intersecting, ratio) {
        Some(reveal) => {
            let _ = target.class_list().add_1(REVEAL_CLASS);
            log::debug!("Revealed element {}", reveal.key);
            true
        }
        None => false,
    }
}

fn observe_reveals(selector: &str, options: &RevealOptions) -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = web_sys::window()?.document()?;
    let nodes = document.query_selector_all(selector).ok()?;
    let targets: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    let scheduler = Rc::new(RefCell::new(RevealScheduler::new(options)));
    let keys = scheduler.borrow_mut().register(targets.len());

    let callback = {
        let scheduler = scheduler.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                let target = entry.target();
                let revealed = reveal_target(
                    &mut scheduler.borrow_mut(),
                    &target,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if revealed {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_string());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

    for (target, key) in targets.iter().zip(keys) {
        let _ = target.set_attribute(REVEAL_KEY_ATTR, &key.to_string());
        observer.observe(target);
    }
    log::debug!("Observing {} element(s) for reveal", scheduler.borrow().pending());

    Some((observer, callback))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::{reveal_options, REVEAL_SELECTOR};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_cards() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(r#"
            <div class="strategy-card"></div>
            <div class="stat-item"></div>
            <div class="info-card"></div>
            <div class="investor-card"></div>
            <div class="unrelated"></div>
        "#);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn elements(root: &Element, selector: &str) -> Vec<Element> {
        let nodes = root.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .collect()
    }

    #[wasm_bindgen_test]
    fn observe_reveals_keys_every_matching_element() {
        let root = mount_cards();
        let (observer, _callback) = observe_reveals(REVEAL_SELECTOR, &reveal_options()).expect("observer created");

        let targets = elements(&root, REVEAL_SELECTOR);
        assert_eq!(targets.len(), 4);
        let mut keys: Vec<RevealKey> = targets
            .iter()
            .map(|el| {
                el.get_attribute(REVEAL_KEY_ATTR)
                    .and_then(|k| RevealKey::parse(&k))
                    .expect("numeric reveal key")
            })
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);

        let other = root.query_selector(".unrelated").unwrap().unwrap();
        assert_eq!(other.get_attribute(REVEAL_KEY_ATTR), None);

        observer.disconnect();
        root.remove();
    }

    #[wasm_bindgen_test]
    fn reveal_target_adds_class_once() {
        let root = mount_cards();
        let mut scheduler = RevealScheduler::new(&reveal_options());
        let keys = scheduler.register(1);
        let card = root.query_selector(".strategy-card").unwrap().unwrap();
        card.set_attribute(REVEAL_KEY_ATTR, &keys[0].to_string()).unwrap();

        assert!(!reveal_target(&mut scheduler, &card, true, 0.05));
        assert!(!card.class_list().contains(REVEAL_CLASS));

        assert!(reveal_target(&mut scheduler, &card, true, 0.5));
        assert!(card.class_list().contains(REVEAL_CLASS));

        // already spent: no second unobserve, class stays
        assert!(!reveal_target(&mut scheduler, &card, true, 1.0));
        assert!(card.class_list().contains(REVEAL_CLASS));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn reveal_target_ignores_unkeyed_elements() {
        let root = mount_cards();
        let mut scheduler = RevealScheduler::new(&reveal_options());
        scheduler.register(1);
        let other = root.query_selector(".unrelated").unwrap().unwrap();
        assert!(!reveal_target(&mut scheduler, &other, true, 1.0));
        assert!(!other.class_list().contains(REVEAL_CLASS));
        root.remove();
    }
}
