//! New account registration.
use crate::api::{self, ApiClient};
use crate::components::ErrorMessage;
use crate::credentials::CredentialStore;
use crate::routes::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[tracing::instrument]
#[function_component(Register)]
pub fn register() -> Html {
    let navigator = use_navigator().expect("navigator not found");
    let username = use_node_ref();
    let password = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let client = use_memo((), |_| ApiClient::new(CredentialStore::default()));

    let onsubmit = {
        let navigator = navigator.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let client = client.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            error.set(None);
            loading.set(true);

            let navigator = navigator.clone();
            let username = username.clone();
            let password = password.clone();
            let error = error.clone();
            let loading = loading.clone();
            let client = client.clone();

            spawn_local(async move {
                // get input values
                let username = username
                    .cast::<web_sys::HtmlInputElement>()
                    .expect("could not cast input elm");

                let password = password
                    .cast::<web_sys::HtmlInputElement>()
                    .expect("could not cast input elm");

                let username = username.value().trim().to_string();
                let password = password.value();

                match api::auth::register(&client, username, password).await {
                    Ok(()) => navigator.push(&Route::Login),

                    Err(err) => {
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class={classes!("auth-card")}>
            <h1>{ "CANTOR" }</h1>
            <p class={classes!("tagline")}>{ "Create Account" }</p>

            if let Some(message) = (*error).clone() {
                <ErrorMessage {message} />
            }

            <form {onsubmit}>
                <label>
                    { "Username" }
                    <input
                        ref={username}
                        placeholder={"Choose your username"}
                        required={true} />
                </label>
                <label>
                    { "Password" }
                    <input type={"password"}
                        ref={password}
                        placeholder={"Create a strong password"}
                        required={true} />
                </label>

                <button disabled={*loading}>
                    { if *loading { "Creating account..." } else { "Register" } }
                </button>
            </form>

            <div class={classes!("align-center")}>
                <Link<Route> to={Route::Login}>{ "Back to Login" }</Link<Route>>
            </div>
        </div>
    }
}
