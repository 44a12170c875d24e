use wasm_bindgen::JsValue;
use web_sys::window;
use yew::prelude::*;

const VIEWER_SCRIPT_ID: &str = "hero-scene-viewer";

/// Injects the viewer module into `<head>` unless it is already there.
/// Returns `true` when this call issued the request.
pub fn ensure_viewer_loaded(script_url: &str) -> Result<bool, JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.get_element_by_id(VIEWER_SCRIPT_ID).is_some() {
        return Ok(false);
    }

    let script = document.create_element("script")?;
    script.set_id(VIEWER_SCRIPT_ID);
    script.set_attribute("type", "module")?;
    script.set_attribute("src", script_url)?;

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?;
    head.append_child(&script)?;
    Ok(true)
}

#[derive(Properties, PartialEq)]
pub struct SceneViewerProps {
    pub scene_url: AttrValue,
}

/// The heavy 3D hero. Only mounted once the gate allows it, so the scene file
/// is never requested otherwise.
#[function_component(SceneViewer)]
pub fn scene_viewer(props: &SceneViewerProps) -> Html {
    html! {
        <div class="hero-scene">
            <spline-viewer url={props.scene_url.clone()}></spline-viewer>
        </div>
    }
}
