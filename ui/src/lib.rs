use payloads::APIClient;
use portal::session::SessionStore;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

mod components;
mod hooks;
mod logs;
mod pages;
mod session;
mod state;

pub use state::State;

use components::LanguageToggle;
use pages::{
    ForgotPasswordPage, HomePage, LoginPage, SetPasswordPage, SignupPage,
};

/// Used when the build doesn't set `BACKEND_URL`.
pub const DEFAULT_BACKEND_URL: &str =
    "http://dev-stsandbox.rookierise.org/api/CompanyPortal";

/// Global API client, carrying the stored bearer token if there is one.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL);
    APIClient::new(address).with_bearer_token(session::LocalStore.token())
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());
    let (state, _) = use_store::<State>();

    html! {
        <BrowserRouter>
            <div
                dir={state.language.dir()}
                lang={state.language.to_string()}
                class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors"
            >
                <header class="flex justify-end max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-4">
                    <LanguageToggle />
                </header>
                <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/set-password")]
    SetPassword,
    #[at("/home")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Root | Route::NotFound => {
            html! { <Redirect<Route> to={Route::Signup} /> }
        }
        Route::Signup => html! { <SignupPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::SetPassword => html! { <SetPasswordPage /> },
        Route::Home => html! { <HomePage /> },
    }
}
