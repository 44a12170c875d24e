use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api;
use crate::collection::{CollectionDetails, CollectionMetadata};
use crate::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct CollectionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Fetches the collection metadata once per page load and shares the resolved
/// details with everything below it. Failures keep the defaults.
#[function_component(CollectionProvider)]
pub fn collection_provider(props: &CollectionProviderProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let metadata = use_state(|| None::<CollectionMetadata>);
    let is_mounted = use_is_mounted();

    {
        let metadata = metadata.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_collection(&config).await {
                        Ok(fetched) => {
                            if is_mounted() {
                                info!("Collection metadata loaded");
                                metadata.set(Some(fetched));
                            }
                        }
                        Err(err) => {
                            debug!("collection metadata unavailable, using defaults: {}", err);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let details = CollectionDetails::resolve((*metadata).as_ref());

    html! {
        <ContextProvider<CollectionDetails> context={details}>
            { for props.children.iter() }
        </ContextProvider<CollectionDetails>>
    }
}
