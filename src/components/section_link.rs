use web_sys::MouseEvent;
use yew::prelude::*;

use crate::navigation::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub href: AttrValue,
    #[prop_or(AttrValue::Static("nav-link"))]
    pub class: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    pub children: Children,
}

/// In-page anchor that smooth-scrolls instead of jumping.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&href);
            if let Some(extra) = &extra {
                extra.emit(e);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.to_string()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(FooterLink)]
    fn footer_link() -> Html {
        html! { <SectionLink href="#invest" class="footer-link">{"Invest"}</SectionLink> }
    }

    #[function_component(DefaultLink)]
    fn default_link() -> Html {
        html! { <SectionLink href="#about">{"About"}</SectionLink> }
    }

    fn mount_root() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    async fn renders_anchor_with_given_class() {
        let root = mount_root();
        yew::Renderer::<FooterLink>::with_root(root.clone()).render();
        TimeoutFuture::new(10).await;

        let link = root.query_selector("a").unwrap().expect("link rendered");
        assert_eq!(link.get_attribute("class").as_deref(), Some("footer-link"));
        assert_eq!(link.get_attribute("href").as_deref(), Some("#invest"));
        assert_eq!(link.text_content().as_deref(), Some("Invest"));
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn defaults_to_nav_link_class() {
        let root = mount_root();
        yew::Renderer::<DefaultLink>::with_root(root.clone()).render();
        TimeoutFuture::new(10).await;

        let link = root.query_selector("a").unwrap().expect("link rendered");
        assert_eq!(link.get_attribute("class").as_deref(), Some("nav-link"));
        root.remove();
    }
}
