use super::auth_guard::AuthGuard;
use crate::pages::{
    auth::{Login, Register},
    dashboard::{Dashboard, Home, Positions},
    Index, NotFound,
};
use yew::prelude::*;
use yew_router::prelude::*;

// Routes
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Index,

    #[at("/login")]
    Login,

    #[at("/register")]
    Register,

    /// Initial page for authenticated users.
    #[at("/dashboard")]
    Dashboard,

    /// Positions administration.
    #[at("/dashboard/positions")]
    Positions,

    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Index => html! { <Index /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Dashboard => html! { <AuthGuard><Dashboard><Home /></Dashboard></AuthGuard> },
        Route::Positions => html! { <AuthGuard><Dashboard><Positions /></Dashboard></AuthGuard> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
#[path = "./routes_test.rs"]
mod routes_test;
