use js_sys::Array;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MediaQueryList, MediaQueryListEvent,
};
use yew::prelude::*;

use crate::hero::gate::{reached_visibility, VISIBILITY_THRESHOLD};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type ChangeCallback = Closure<dyn FnMut(MediaQueryListEvent)>;

/// Emits `on_visible` once, the first time enough of `node` scrolls into view.
/// The observer disconnects itself after firing and on unmount.
#[hook]
pub fn use_hero_visibility(node: NodeRef, on_visible: Callback<()>) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let observer = node
                .cast::<Element>()
                .and_then(|element| observe_once(&element, on_visible));

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        node,
    );
}

fn observe_once(
    element: &Element,
    on_visible: Callback<()>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let crossed = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| reached_visibility(entry.is_intersecting(), entry.intersection_ratio()));
            if crossed {
                on_visible.emit(());
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            debug!("IntersectionObserver unavailable, hero stays static: {:?}", err);
            None
        }
    }
}

/// Reports the OS reduced-motion preference at mount and on every change
/// until unmount.
#[hook]
pub fn use_reduced_motion(on_change: Callback<bool>) {
    use_effect_with_deps(
        move |_| {
            let listener = reduced_motion_query().and_then(|query| {
                on_change.emit(query.matches());
                subscribe(query, on_change)
            });

            move || {
                if let Some((query, callback)) = listener {
                    let _ = query.remove_event_listener_with_callback(
                        "change",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

fn reduced_motion_query() -> Option<MediaQueryList> {
    window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
}

fn subscribe(
    query: MediaQueryList,
    on_change: Callback<bool>,
) -> Option<(MediaQueryList, ChangeCallback)> {
    let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
        on_change.emit(event.matches());
    }) as Box<dyn FnMut(MediaQueryListEvent)>);

    match query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
        Ok(()) => Some((query, callback)),
        Err(err) => {
            debug!("could not subscribe to reduced-motion changes: {:?}", err);
            None
        }
    }
}
