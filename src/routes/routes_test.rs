use super::*;
use yew_router::Routable;

#[test]
fn routes_should_match_api_pages() {
    assert_eq!(Route::Login.to_path(), "/login");
    assert_eq!(Route::Register.to_path(), "/register");
    assert_eq!(Route::Dashboard.to_path(), "/dashboard");
    assert_eq!(Route::Positions.to_path(), "/dashboard/positions");
}

#[test]
fn recognize_should_resolve_nested_routes() {
    assert_eq!(
        Route::recognize("/dashboard/positions"),
        Some(Route::Positions),
        "nested path should not be shadowed by `/dashboard`"
    );
}
