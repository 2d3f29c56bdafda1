use yew::prelude::*;

use crate::config::{LINKEDIN_COMPANY_URL, LINKEDIN_POSTS};
use crate::feed::{company_frame_height, post_embed_src};
use crate::hooks::use_window_events::use_is_mobile;

fn default_posts() -> Vec<AttrValue> {
    LINKEDIN_POSTS.iter().map(|p| AttrValue::from(*p)).collect()
}

#[derive(Properties, PartialEq)]
pub struct LinkedInFeedProps {
    #[prop_or(AttrValue::Static(LINKEDIN_COMPANY_URL))]
    pub company_url: AttrValue,
    #[prop_or_else(default_posts)]
    pub posts: Vec<AttrValue>,
}

/// LinkedIn company page and posts. The site may refuse framing, in which
/// case the iframes stay blank and the "Open on LinkedIn" link still works.
#[function_component(LinkedInFeed)]
pub fn linkedin_feed(props: &LinkedInFeedProps) -> Html {
    let is_mobile = use_is_mobile();
    let frame_style = format!("width: 100%; height: {}; border: 0;", company_frame_height(is_mobile));

    html! {
        <div id="linkedin-feed">
            <div class="feed-actions" style="display: flex; justify-content: center; margin-bottom: 1rem;">
                <a href={props.company_url.clone()} target="_blank" rel="noopener noreferrer" class="btn-secondary">
                    {"Open on LinkedIn"}
                </a>
            </div>
            <div style="width: 100%;">
                <iframe
                    class="linkedin-iframe"
                    title="Prytaneum Partners on LinkedIn"
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    allow="encrypted-media; clipboard-write"
                    sandbox="allow-same-origin allow-scripts allow-popups allow-forms"
                    src={props.company_url.clone()}
                    style={frame_style}
                />
            </div>
            {
                if props.posts.is_empty() {
                    html! { <div class="feed-empty">{"LinkedIn posts will appear here."}</div> }
                } else {
                    html! {
                        <div class="feed-list">
                            { for props.posts.iter().map(|post| html! {
                                <div class="linkedin-post" key={post.to_string()}>
                                    <iframe
                                        src={post_embed_src(post)}
                                        title="LinkedIn Post"
                                        loading="lazy"
                                        referrerpolicy="no-referrer-when-downgrade"
                                        allow="encrypted-media; clipboard-write; picture-in-picture; web-share"
                                    />
                                </div>
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
