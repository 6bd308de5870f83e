//! Authentication guard.
//! Route guard that verifies a session credential is present.
use crate::app::SessionStateReducer;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    /// Children to render if a credential is stored.
    #[prop_or_default]
    pub children: Children,

    /// Route to redirect to if no credential is stored.
    /// If not provided, redirects to [`Route::Login`].
    #[prop_or(Route::Login)]
    pub redirect: Route,
}

#[function_component(AuthGuard)]
pub fn auth_guard(props: &AuthGuardProps) -> Html {
    let session =
        use_context::<SessionStateReducer>().expect("`SessionStateReducer` context not found");

    if !session.is_authenticated() {
        return html! { <Redirect<Route> to={props.redirect.clone()} /> };
    }

    html! { <>{ for props.children.iter() }</> }
}
