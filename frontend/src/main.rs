use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, HtmlElement, MouseEvent, Window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod collection;
mod config;
mod hero {
    pub mod gate;
    pub mod observers;
    pub mod scene;
}
mod components {
    pub mod collection_provider;
    pub mod copy_button;
    pub mod hero_banner;
}
mod pages {
    pub mod landing;
    pub mod not_found;
    pub mod sections;
}
mod utils {
    pub mod clipboard;
    pub mod format;
}

use collection::CollectionDetails;
use components::collection_provider::CollectionProvider;
use config::AppConfig;
use pages::{landing::Landing, not_found::NotFound};

/// Used on pages without a hero section.
const SCROLLED_OFFSET_PX: f64 = 80.0;

const NAV_ANCHORS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#quality", "Quality"),
    ("#minting", "Minting"),
    ("#details", "Details"),
];

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
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// The nav turns solid once the hero has scrolled out of view, or after a
/// short offset on pages that have no hero.
fn past_hero(scroll_y: f64, hero_height: Option<f64>) -> bool {
    scroll_y > hero_height.unwrap_or(SCROLLED_OFFSET_PX)
}

fn hero_height(window: &Window) -> Option<f64> {
    window
        .document()?
        .get_element_by_id("hero")?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|hero| f64::from(hero.offset_height()))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let details = use_context::<CollectionDetails>().unwrap_or_default();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(window) = window.as_ref() {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(past_hero(offset, hero_height(window)));
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

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
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Cluckers"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ANCHORS.iter().map(|(href, label)| html! {
                        <a class="nav-link" href={*href} onclick={close_menu.clone()}>
                            { *label }
                        </a>
                    }) }
                    <a
                        class="nav-market-button"
                        href={details.opensea_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={close_menu.clone()}
                    >
                        {"OpenSea"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <CollectionProvider>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </CollectionProvider>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    console_log::init_with_level(level).expect("error initializing log");

    let config = AppConfig::from_build_env();
    info!("Starting application (backend: {:?})", config.backend_url);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_solid_only_past_the_hero() {
        assert!(!past_hero(0.0, Some(900.0)));
        assert!(!past_hero(600.0, Some(900.0)));
        assert!(!past_hero(900.0, Some(900.0)));
        assert!(past_hero(901.0, Some(900.0)));
    }

    #[test]
    fn pages_without_hero_use_a_short_offset() {
        assert!(!past_hero(SCROLLED_OFFSET_PX, None));
        assert!(past_hero(SCROLLED_OFFSET_PX + 1.0, None));
    }
}
