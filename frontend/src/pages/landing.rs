use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::collection::CollectionDetails;
use crate::components::hero_banner::HeroBanner;
use crate::pages::sections::{About, Details, Footer, LazyMinting, Quality};

#[function_component(Landing)]
pub fn landing() -> Html {
    let details = use_context::<CollectionDetails>().unwrap_or_default();

    use_title("The Cluckers Collective".to_string());

    let opensea_url = AttrValue::from(details.opensea_url.clone());

    html! {
        <main class="landing">
            <HeroBanner opensea_url={opensea_url.clone()} />
            <About />
            <Quality />
            <LazyMinting />
            <Details details={details} />
            <Footer opensea_url={opensea_url} />
        </main>
    }
}
