//! Dashboard layout.
use crate::app::{SessionAction, SessionStateReducer};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    #[prop_or_default]
    pub children: Children,
}

/// Frame for authenticated pages: brand, navigation, and logout.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session =
        use_context::<SessionStateReducer>().expect("`SessionStateReducer` context not found");

    let navigator = use_navigator().expect("navigator not found");

    let onlogout = {
        let session = session.dispatcher();
        let navigator = navigator.clone();

        Callback::from(move |_: web_sys::MouseEvent| {
            session.dispatch(SessionAction::SignOut);
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class={classes!("dashboard")}>
            <aside class={classes!("sidebar")}>
                <div class={classes!("brand")}>
                    <h1>{ "CANTOR" }</h1>
                    <p>{ "Dashboard" }</p>
                </div>

                <nav>
                    <Link<Route> to={Route::Dashboard}>{ "Dashboard" }</Link<Route>>
                    <Link<Route> to={Route::Positions}>{ "Positions" }</Link<Route>>
                </nav>

                <button class={classes!("btn-logout")} onclick={onlogout}>
                    { "Logout" }
                </button>
            </aside>

            <main class={classes!("dashboard-content")}>
                { for props.children.iter() }
            </main>
        </div>
    }
}
