//! Landing page.
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <div class={classes!("landing")}>
            <h1>{ "CANTOR" }</h1>
            <p class={classes!("tagline")}>{ "Secure Authentication" }</p>
            <p>{ "Welcome to your secure dashboard. Please login to continue." }</p>
            <div class={classes!("landing-actions")}>
                <Link<Route> classes={classes!("btn-primary")} to={Route::Login}>
                    { "Login" }
                </Link<Route>>
                <Link<Route> classes={classes!("btn-secondary")} to={Route::Register}>
                    { "Register" }
                </Link<Route>>
            </div>
        </div>
    }
}
