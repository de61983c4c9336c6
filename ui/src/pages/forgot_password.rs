use portal::forgot_password::{ForgotPasswordForm, Msg};
use portal::{Label, Timings};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use super::{CARD, SUBMIT_BUTTON};
use crate::components::{ErrorNotice, SuccessNotice, TextField};
use crate::hooks::{use_form, use_title};
use crate::{Route, State};

#[function_component]
pub fn ForgotPasswordPage() -> Html {
    let (state, _) = use_store::<State>();
    let lang = state.language;
    let form =
        use_form(|| ForgotPasswordForm::new(Timings::from_build_env()));
    use_title(Label::ForgotPasswordTitle);

    let onsubmit = form.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let oninput = form.callback(Msg::EditEmail);
    let onblur = form.callback(|()| Msg::BlurEmail);

    let view = form.state();
    let loading = view.is_loading();
    let can_submit = view.can_submit();

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {Label::ForgotPasswordTitle.text(lang)}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {Label::ForgotPasswordDescription.text(lang)}
                    </p>
                </div>

                <form onsubmit={onsubmit} class={CARD}>
                    <ErrorNotice message={view.error_message(lang)} />
                    <SuccessNotice message={view.success_message(lang)} />

                    <TextField
                        id="email"
                        input_type="email"
                        label={Label::Email.text(lang)}
                        placeholder={Label::EnterEmail.text(lang)}
                        value={view.email().to_string()}
                        error={view.email_message(lang).map(AttrValue::from)}
                        disabled={loading}
                        oninput={oninput}
                        onblur={onblur}
                    />

                    <button type="submit" disabled={!can_submit} class={SUBMIT_BUTTON}>
                        {if loading {
                            Label::Sending.text(lang)
                        } else {
                            Label::SendOtp.text(lang)
                        }}
                    </button>
                </form>

                <p class="text-center text-sm">
                    <Link<Route> to={Route::Login} classes="text-neutral-700 dark:text-neutral-300 hover:underline">
                        {Label::Login.text(lang)}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
