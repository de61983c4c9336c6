use crate::{Route, session::LocalStore};
use portal::session::SessionStore;
use yew::prelude::*;
use yew_router::prelude::*;

/// Forget the stored token and go back to the login page.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let navigator = use_navigator();

    Callback::from(move |_| {
        LocalStore.clear();
        tracing::info!("logged out");
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
