//! Positions administration page.
use super::state::{PositionsAction, PositionsState, PositionsStateDispatcher};
use crate::api::{self, positions, ApiClient};
use crate::common::{input_value, scroll_to_top};
use crate::components::ErrorMessage;
use crate::credentials::CredentialStore;
use crate::error::ApiError;
use crate::routes::Route;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[tracing::instrument]
#[function_component(Positions)]
pub fn positions() -> Html {
    let navigator = use_navigator().expect("navigator not found");
    let state = use_reducer(PositionsState::default);
    let client = use_memo((), |_| ApiClient::new(CredentialStore::default()));

    {
        let client = client.clone();
        let state = state.dispatcher();
        let navigator = navigator.clone();

        use_effect_with((), move |_| {
            spawn_local(refresh(client, state, navigator));
        });
    }

    let onrefresh = {
        let client = client.clone();
        let state = state.dispatcher();
        let navigator = navigator.clone();

        Callback::from(move |_: web_sys::MouseEvent| {
            spawn_local(refresh(client.clone(), state.clone(), navigator.clone()));
        })
    };

    let onsubmit = {
        let client = client.clone();
        let state = state.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            state.dispatch(PositionsAction::SetError(None));

            let form = match state.form() {
                Ok(form) => form,
                Err(message) => {
                    state.dispatch(PositionsAction::SetError(Some(message.to_string())));
                    return;
                }
            };

            let editing = state.editing;
            let client = client.clone();
            let state = state.dispatcher();
            let navigator = navigator.clone();

            spawn_local(async move {
                let saved = match editing {
                    Some(id) => positions::update(&client, id, &form).await,
                    None => positions::create(&client, &form).await,
                };

                match saved {
                    Ok(()) => {
                        state.dispatch(PositionsAction::ClearForm);
                        refresh(client, state, navigator).await;
                    }

                    Err(ApiError::AuthFailure) => navigator.push(&Route::Login),

                    Err(err) => {
                        state.dispatch(PositionsAction::SetError(Some(err.to_string())));
                    }
                }
            });
        })
    };

    let oncancel = {
        let state = state.dispatcher();

        Callback::from(move |_: web_sys::MouseEvent| {
            state.dispatch(PositionsAction::CancelEdit);
        })
    };

    let oncode = {
        let state = state.dispatcher();
        Callback::from(move |e: Event| {
            state.dispatch(PositionsAction::SetCode(input_value(&e)));
        })
    };

    let onname = {
        let state = state.dispatcher();
        Callback::from(move |e: Event| {
            state.dispatch(PositionsAction::SetName(input_value(&e)));
        })
    };

    // delete requires explicit confirmation before any request is issued
    let ondelete = {
        let client = client.clone();
        let state = state.dispatcher();
        let navigator = navigator.clone();

        Callback::from(move |id: i64| {
            let confirmed = web_sys::window()
                .map(|window| {
                    window
                        .confirm_with_message("Are you sure you want to delete this position?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);

            if !confirmed {
                return;
            }

            state.dispatch(PositionsAction::SetError(None));

            let client = client.clone();
            let state = state.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                match positions::remove(&client, id).await {
                    Ok(()) => refresh(client, state, navigator).await,

                    Err(ApiError::AuthFailure) => navigator.push(&Route::Login),

                    Err(err) => {
                        state.dispatch(PositionsAction::SetError(Some(err.to_string())));
                    }
                }
            });
        })
    };

    html! {
        <div class={classes!("positions")}>
            <div class={classes!("positions-header")}>
                <h2>{ "Positions" }</h2>
                <button disabled={state.loading} onclick={onrefresh}>
                    { "Refresh" }
                </button>
            </div>

            if let Some(message) = state.error.clone() {
                <ErrorMessage {message} />
            }

            <div class={classes!("positions-form")}>
                <h3>
                    { if state.is_editing() { "Edit Position" } else { "Create New Position" } }
                </h3>

                <form {onsubmit}>
                    <label>
                        { "Position Code" }
                        <input
                            placeholder={"e.g., MGR"}
                            value={state.code.clone()}
                            onchange={oncode}
                            required={true} />
                    </label>
                    <label>
                        { "Position Name" }
                        <input
                            placeholder={"e.g., Manager"}
                            value={state.name.clone()}
                            onchange={onname}
                            required={true} />
                    </label>

                    <div class={classes!("form-actions")}>
                        <button class={classes!("btn-primary")}>
                            { if state.is_editing() { "Update Position" } else { "Create Position" } }
                        </button>

                        if state.is_editing() {
                            <button type={"button"} onclick={oncancel}>
                                { "Cancel" }
                            </button>
                        }
                    </div>
                </form>
            </div>

            if state.positions.is_empty() {
                <div class={classes!("positions-empty")}>
                    <p>{ "No positions found." }</p>
                    <p>{ "Create your first position to get started." }</p>
                </div>
            } else {
                <table class={classes!("positions-table")}>
                    <thead>
                        <tr>
                            <th>{ "ID" }</th>
                            <th>{ "Code" }</th>
                            <th>{ "Name" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for state.positions.iter().map(|position| {
                            let onedit = {
                                let state = state.dispatcher();
                                let position = position.clone();

                                Callback::from(move |_: web_sys::MouseEvent| {
                                    state.dispatch(PositionsAction::BeginEdit(position.clone()));
                                    scroll_to_top();
                                })
                            };

                            let ondelete = {
                                let ondelete = ondelete.clone();
                                let id = position.id;

                                Callback::from(move |_: web_sys::MouseEvent| {
                                    ondelete.emit(id);
                                })
                            };

                            html! {
                                <tr key={position.id.to_string()}>
                                    <td>{ position.id }</td>
                                    <td>{ &position.code }</td>
                                    <td>{ &position.name }</td>
                                    <td class={classes!("row-actions")}>
                                        <button onclick={onedit}>{ "Edit" }</button>
                                        <button class={classes!("btn-danger")} onclick={ondelete}>
                                            { "Delete" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}

/// Replaces the collection with the server's, wholesale.
///
/// The server is the sole source of truth; local edits are never assumed
/// correct until a re-fetch confirms them. A failed fetch leaves the
/// stale collection visible.
async fn refresh(client: Rc<ApiClient>, state: PositionsStateDispatcher, navigator: Navigator) {
    state.dispatch(PositionsAction::SetError(None));
    state.dispatch(PositionsAction::SetLoading(true));

    match api::positions::list(&client).await {
        Ok(positions) => state.dispatch(PositionsAction::SetPositions(positions)),

        Err(ApiError::AuthFailure) => navigator.push(&Route::Login),

        Err(err) => state.dispatch(PositionsAction::SetError(Some(err.to_string()))),
    }

    state.dispatch(PositionsAction::SetLoading(false));
}
