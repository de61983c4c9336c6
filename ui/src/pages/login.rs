use portal::Label;
use portal::login::{Field, LoginForm, Msg};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use super::{CARD, SUBMIT_BUTTON};
use crate::components::{ErrorNotice, SuccessNotice, TextField};
use crate::hooks::{use_form, use_title};
use crate::{Route, State};

#[function_component]
pub fn LoginPage() -> Html {
    let (state, _) = use_store::<State>();
    let lang = state.language;
    let form = use_form(LoginForm::new);
    use_title(Label::LoginTitle);

    let onsubmit = form.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let input = |field: Field| form.callback(move |value| Msg::Edit(field, value));
    let blur = |field: Field| form.callback(move |()| Msg::Blur(field));

    let view = form.state();
    let loading = view.is_loading();
    let can_submit = view.can_submit();
    let error = |field: Field| view.field_message(field, lang).map(AttrValue::from);

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {Label::LoginTitle.text(lang)}
                    </h1>
                </div>

                <form onsubmit={onsubmit} class={CARD}>
                    <ErrorNotice message={view.error_message(lang)} />
                    <SuccessNotice message={view.success_message(lang)} />

                    <TextField
                        id="email"
                        input_type="email"
                        label={Label::Email.text(lang)}
                        placeholder={Label::EnterEmail.text(lang)}
                        value={view.fields().email.clone()}
                        error={error(Field::Email)}
                        disabled={loading}
                        oninput={input(Field::Email)}
                        onblur={blur(Field::Email)}
                    />
                    <TextField
                        id="password"
                        input_type="password"
                        label={Label::Password.text(lang)}
                        placeholder={Label::EnterPassword.text(lang)}
                        value={view.fields().password.clone()}
                        error={error(Field::Password)}
                        disabled={loading}
                        oninput={input(Field::Password)}
                        onblur={blur(Field::Password)}
                    />

                    <div class="text-end">
                        <Link<Route> to={Route::ForgotPassword} classes="text-sm text-neutral-700 dark:text-neutral-300 hover:underline">
                            {Label::ForgotPasswordLink.text(lang)}
                        </Link<Route>>
                    </div>

                    <button type="submit" disabled={!can_submit} class={SUBMIT_BUTTON}>
                        {if loading {
                            Label::LoggingIn.text(lang)
                        } else {
                            Label::Login.text(lang)
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {Label::NoAccount.text(lang)}{" "}
                    <Link<Route> to={Route::Signup} classes="font-medium hover:underline">
                        {Label::SignupLink.text(lang)}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
