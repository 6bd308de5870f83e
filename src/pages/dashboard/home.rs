//! Dashboard home.
use crate::app::SessionStateReducer;
use crate::hooks::use_identity;
use gloo_timers::future::TimeoutFuture;
use time::format_description::well_known::Rfc3339;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let session =
        use_context::<SessionStateReducer>().expect("`SessionStateReducer` context not found");

    let identity = use_identity();
    let copied = use_state(|| false);

    // Decoding is best effort, so display falls back to generic labels.
    let username = identity
        .as_ref()
        .map(|identity| identity.username.clone())
        .unwrap_or_else(|| "Guest".to_string());

    let role = identity
        .as_ref()
        .map(|identity| identity.role.clone())
        .unwrap_or_else(|| "User".to_string());

    let expires = identity
        .as_ref()
        .and_then(|identity| identity.expires_at.format(&Rfc3339).ok());

    let token = session.token.clone();

    let oncopy = {
        let copied = copied.clone();
        let token = token.clone();

        Callback::from(move |_: web_sys::MouseEvent| {
            let Some(token) = token.as_ref() else {
                return;
            };

            let Some(window) = web_sys::window() else {
                return;
            };

            let _ = window.navigator().clipboard().write_text(token);

            let copied = copied.clone();
            spawn_local(async move {
                copied.set(true);
                TimeoutFuture::new(2_000).await;
                copied.set(false);
            });
        })
    };

    html! {
        <div class={classes!("home")}>
            <div class={classes!("welcome-card")}>
                <h3>{ format!("Welcome, {username}!") }</h3>
                <p>
                    { "You're logged in as " }
                    <span class={classes!("role")}>{ role.clone() }</span>
                </p>
            </div>

            <div class={classes!("stats")}>
                <div class={classes!("stat-card")}>
                    <p>{ "Status" }</p>
                    <p>{ "Active" }</p>
                </div>
                <div class={classes!("stat-card")}>
                    <p>{ "Role" }</p>
                    <p>{ role }</p>
                </div>
                <div class={classes!("stat-card")}>
                    <p>{ "Session" }</p>
                    <p>{ expires.unwrap_or_else(|| "Secure".to_string()) }</p>
                </div>
            </div>

            if let Some(token) = token {
                <div class={classes!("token-card")}>
                    <div class={classes!("token-header")}>
                        <h4>{ "Bearer Token" }</h4>
                        <button onclick={oncopy}>
                            { if *copied { "Copied" } else { "Copy" } }
                        </button>
                    </div>
                    <pre>{ token }</pre>
                </div>
            }
        </div>
    }
}
