use log::{debug, info};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::hero::gate::{HeroAction, HeroGate};
use crate::hero::observers::{use_hero_visibility, use_reduced_motion};
use crate::hero::scene::{ensure_viewer_loaded, SceneViewer};

const STATIC_HERO_IMAGE: &str = "/assets/hero/cluckers-hero.webp";

#[derive(Properties, PartialEq)]
pub struct HeroBannerProps {
    pub opensea_url: AttrValue,
}

#[function_component(HeroBanner)]
pub fn hero_banner(props: &HeroBannerProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let gate = use_reducer(HeroGate::default);
    let hero_ref = use_node_ref();

    {
        let dispatcher = gate.dispatcher();
        use_hero_visibility(
            hero_ref.clone(),
            Callback::from(move |_| dispatcher.dispatch(HeroAction::HeroVisible)),
        );
    }
    {
        let dispatcher = gate.dispatcher();
        use_reduced_motion(Callback::from(move |reduced: bool| {
            dispatcher.dispatch(HeroAction::ReducedMotion(reduced))
        }));
    }

    let render_scene = gate.should_render_scene();

    // Nothing for the viewer is fetched before the gate first opens.
    {
        let script_url = config.viewer_script_url.clone();
        use_effect_with_deps(
            move |render_scene: &bool| {
                if *render_scene {
                    match ensure_viewer_loaded(&script_url) {
                        Ok(true) => info!("Loading 3D hero viewer"),
                        Ok(false) => {}
                        Err(err) => debug!("could not load 3D hero viewer: {:?}", err),
                    }
                }
                || ()
            },
            render_scene,
        );
    }

    let toggle = {
        let dispatcher = gate.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HeroAction::ToggleAnimation))
    };

    let toggle_label = if gate.reduced_motion {
        "3D off (reduced motion)"
    } else if gate.user_enabled {
        "Disable 3D"
    } else {
        "Enable 3D"
    };

    html! {
        <section id="hero" class="hero" ref={hero_ref}>
            {
                if render_scene {
                    html! { <SceneViewer scene_url={config.scene_url.clone()} /> }
                } else {
                    html! {
                        <div class="hero-static">
                            <img
                                src={STATIC_HERO_IMAGE}
                                alt="A flock of hand-drawn Cluckers chickens gathered around a glowing egg"
                            />
                        </div>
                    }
                }
            }
            <div class="hero-content">
                <h1>{"The Cluckers Collective"}</h1>
                <p class="hero-tagline">
                    {"A flock of one-of-a-kind digital chickens. Hatched on demand, owned forever."}
                </p>
                <div class="hero-actions">
                    <a
                        class="cta-button"
                        href={props.opensea_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"View on OpenSea"}
                    </a>
                    <button
                        type="button"
                        class={classes!("scene-toggle", gate.user_enabled.then(|| "active"))}
                        aria-pressed={gate.user_enabled.to_string()}
                        disabled={gate.reduced_motion}
                        onclick={toggle}
                    >
                        {toggle_label}
                    </button>
                </div>
            </div>
        </section>
    }
}
