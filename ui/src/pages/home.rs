use jiff::Timestamp;
use portal::Label;
use portal::session::{SessionStore, current_claims};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::{use_logout, use_title};
use crate::session::LocalStore;
use crate::{Route, State};

#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();
    let lang = state.language;
    let navigator = use_navigator();
    let on_logout = use_logout();
    use_title(Label::HomeTitle);

    let claims = current_claims(&LocalStore)
        .filter(|claims| !claims.is_expired(Timestamp::now()));

    // Without a usable token there is nothing to show here.
    {
        let signed_in = claims.is_some();
        use_effect_with(signed_in, move |signed_in| {
            if !signed_in {
                LocalStore.clear();
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Login);
                }
            }
        });
    }

    let Some(claims) = claims else {
        return html! {};
    };
    let name = claims
        .get_str("companyName")
        .or(claims.email.as_deref())
        .unwrap_or_default()
        .to_string();

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6 text-center">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-white">
                    {Label::HomeTitle.text(lang)}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("{}, {name}", Label::Welcome.text(lang))}
                </p>
                <button
                    onclick={on_logout}
                    class="bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                           px-6 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                           font-medium"
                >
                    {Label::Logout.text(lang)}
                </button>
            </div>
        </div>
    }
}
