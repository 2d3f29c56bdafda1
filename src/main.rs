use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod feed;
mod modal;
mod navigation;
mod overlay;
mod reveal;
mod submission;
mod hooks {
    pub mod use_reveal;
    pub mod use_scroll_lock;
    pub mod use_window_events;
}
mod components {
    pub mod confirmation;
    pub mod invest_form;
    pub mod investor_modal;
    pub mod linkedin_feed;
    pub mod section_link;
}
mod pages {
    pub mod home;
}

use components::section_link::SectionLink;
use hooks::use_window_events::use_scrolled_past;
use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="nav-link">
                        {"Back to the fund"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::NAV_SCROLLED_AFTER_PX);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("navbar", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="logo-icon">
                    <img class="logo-image" src="/assets/logo.svg" alt="Prytaneum Partners" />
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <SectionLink href="#strategy" onclick={close_menu.clone()}>{"Strategy"}</SectionLink>
                    <SectionLink href="#about" onclick={close_menu.clone()}>{"About"}</SectionLink>
                    <SectionLink href="#investors" onclick={close_menu.clone()}>{"Investors"}</SectionLink>
                    <SectionLink href="#feed" onclick={close_menu.clone()}>{"News"}</SectionLink>
                    <SectionLink href="#invest" class="nav-cta" onclick={close_menu}>{"Invest"}</SectionLink>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
