//! Main application.
use super::{SessionState, SessionStateReducer};
use crate::routes::{routes::switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

// *********************
// *** App Component ***
// *********************

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(SessionState::load);

    html! {
        <BrowserRouter>
        <ContextProvider<SessionStateReducer> context={session}>
            <main>
                <Switch<Route> render={switch} />
            </main>
        </ContextProvider<SessionStateReducer>>
        </BrowserRouter>
    }
}
