//! User login.
use crate::api::{self, ApiClient};
use crate::app::{SessionAction, SessionStateReducer};
use crate::common::input_value;
use crate::components::ErrorMessage;
use crate::credentials::CredentialStore;
use crate::routes::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[tracing::instrument]
#[function_component(Login)]
pub fn login() -> Html {
    let session =
        use_context::<SessionStateReducer>().expect("`SessionStateReducer` context not found");

    let navigator = use_navigator().expect("navigator not found");
    let username = use_state(|| String::new());
    let password = use_state(|| String::new());
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let client = use_memo((), |_| ApiClient::new(CredentialStore::default()));

    let onsubmit = {
        let session = session.clone();
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

            let session = session.clone();
            let navigator = navigator.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let loading = loading.clone();
            let client = client.clone();

            spawn_local(async move {
                match api::auth::login(&client, username, password).await {
                    Ok(token) => {
                        session.dispatch(SessionAction::SignIn(token));
                        navigator.push(&Route::Dashboard);
                    }

                    Err(err) => {
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let username_onchange = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            username.set(input_value(&e));
        })
    };

    let password_onchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            password.set(input_value(&e));
        })
    };

    html! {
        <div class={classes!("auth-card")}>
            <h1>{ "CANTOR" }</h1>
            <p class={classes!("tagline")}>{ "Welcome Back" }</p>

            if let Some(message) = (*error).clone() {
                <ErrorMessage {message} />
            }

            <form {onsubmit}>
                <label>
                    { "Username" }
                    <input
                        placeholder={"Enter your username"}
                        onchange={username_onchange}
                        required={true} />
                </label>
                <label>
                    { "Password" }
                    <input type={"password"}
                        placeholder={"Enter your password"}
                        onchange={password_onchange}
                        required={true} />
                </label>

                <button disabled={*loading}>
                    { if *loading { "Logging in..." } else { "Login" } }
                </button>
            </form>

            <div class={classes!("align-center")}>
                <Link<Route> to={Route::Register}>{ "Create Account" }</Link<Route>>
            </div>
        </div>
    }
}
