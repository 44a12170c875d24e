use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="landing not-found">
            <section class="landing-section">
                <h2>{"This coop is empty"}</h2>
                <p>{"The page you were looking for flew the nest."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">
                    {"Back to the flock"}
                </Link<Route>>
            </section>
        </main>
    }
}
