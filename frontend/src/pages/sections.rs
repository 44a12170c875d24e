use yew::prelude::*;

use crate::collection::CollectionDetails;
use crate::components::copy_button::CopyButton;

const QUALITY_POINTS: &[(&str, &str)] = &[
    (
        "Hand-drawn traits",
        "Every comb, wattle and feather was sketched by hand before it was ever digitised.",
    ),
    (
        "No two alike",
        "Trait combinations are checked for duplicates, so each Clucker is truly unique.",
    ),
    (
        "High-resolution art",
        "Full 4K renders ship with every token, ready for prints and wallpapers.",
    ),
    (
        "Low-fee network",
        "Living on a low-fee network keeps buying and trading cheap for the whole flock.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="landing-section about-section">
            <h2>{"Meet the flock"}</h2>
            <p>
                {"The Cluckers Collective is a community-driven collection of digital chickens. \
                  Each Clucker is generated from hundreds of hand-crafted traits and comes with \
                  its own personality, from the cautious coop-keeper to the fearless road-crosser."}
            </p>
            <p>
                {"Holders get early access to new drops, community events and everything else \
                  that hatches out of the coop."}
            </p>
        </section>
    }
}

#[function_component(Quality)]
pub fn quality() -> Html {
    html! {
        <section id="quality" class="landing-section quality-section">
            <h2>{"Built with care"}</h2>
            <div class="quality-grid">
                { for QUALITY_POINTS.iter().map(|(title, body)| html! {
                    <div class="quality-card">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(LazyMinting)]
pub fn lazy_minting() -> Html {
    html! {
        <section id="minting" class="landing-section minting-section">
            <h2>{"Lazy minting"}</h2>
            <p>
                {"Cluckers are lazy minted: a token is only written to the blockchain at the \
                  moment someone buys it. Nobody pays gas for chickens that never leave the \
                  coop, and you pay the mint cost only when a Clucker becomes yours."}
            </p>
            <ol class="minting-steps">
                <li>{"Browse the collection on OpenSea."}</li>
                <li>{"Pick the Clucker you like and buy it."}</li>
                <li>{"The token is minted straight into your wallet."}</li>
            </ol>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailsProps {
    pub details: CollectionDetails,
}

#[function_component(Details)]
pub fn details(props: &DetailsProps) -> Html {
    let details = &props.details;

    html! {
        <section id="details" class="landing-section details-section">
            <h2>{"Collection details"}</h2>
            <dl class="details-list">
                <div class="details-row">
                    <dt>{"Network"}</dt>
                    <dd>{ details.network.clone() }</dd>
                </div>
                <div class="details-row">
                    <dt>{"Contract"}</dt>
                    <dd class="contract-cell">
                        <code class="contract-short">{ details.short_address() }</code>
                        <CopyButton text={details.contract_address.clone()} label="Copy address" />
                    </dd>
                </div>
                <div class="details-row">
                    <dt>{"Full address"}</dt>
                    <dd>
                        {
                            match details.explorer_url() {
                                Some(url) => html! {
                                    <a href={url} target="_blank" rel="noopener noreferrer">
                                        <code class="contract-full">{ details.contract_address.clone() }</code>
                                    </a>
                                },
                                None => html! {
                                    <code class="contract-full">{ details.contract_address.clone() }</code>
                                },
                            }
                        }
                    </dd>
                </div>
                <div class="details-row">
                    <dt>{"Marketplace"}</dt>
                    <dd>
                        <a href={details.opensea_url.clone()} target="_blank" rel="noopener noreferrer">
                            {"OpenSea"}
                        </a>
                    </dd>
                </div>
            </dl>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub opensea_url: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="landing-footer">
            <a
                class="cta-button"
                href={props.opensea_url.clone()}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"Join the flock on OpenSea"}
            </a>
            <p class="footer-note">
                {"The Cluckers Collective. Digital collectibles only; nothing on this page is financial advice."}
            </p>
        </footer>
    }
}
