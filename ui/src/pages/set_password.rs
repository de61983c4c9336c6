use portal::set_password::{Field, Msg, SetPasswordForm, SetPasswordQuery};
use portal::{Label, Timings};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use super::{CARD, SUBMIT_BUTTON};
use crate::State;
use crate::components::{ErrorNotice, SuccessNotice, TextField};
use crate::hooks::{use_form, use_title};

#[function_component]
pub fn SetPasswordPage() -> Html {
    let (state, _) = use_store::<State>();
    let lang = state.language;
    // `?otpCode=...&email=...` pre-fills the form.
    let query = use_location()
        .and_then(|location| location.query::<SetPasswordQuery>().ok())
        .unwrap_or_default();
    let form = use_form(move || {
        SetPasswordForm::from_query(&query, Timings::from_build_env())
    });
    use_title(Label::SetPasswordTitle);

    let onsubmit = form.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_resend = form.callback(|_: MouseEvent| Msg::ResendOtp);
    let input = |field: Field| form.callback(move |value| Msg::Edit(field, value));
    let blur = |field: Field| form.callback(move |()| Msg::Blur(field));

    let view = form.state();
    let loading = view.is_loading();
    let can_submit = view.can_submit();
    let resend = view.resend();
    let error = |field: Field| view.field_message(field, lang).map(AttrValue::from);

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {Label::SetPasswordTitle.text(lang)}
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

                    <div>
                        <TextField
                            id="otp"
                            label={Label::Otp.text(lang)}
                            placeholder={Label::EnterOtp.text(lang)}
                            value={view.fields().otp.clone()}
                            error={error(Field::Otp)}
                            disabled={loading}
                            oninput={input(Field::Otp)}
                            onblur={blur(Field::Otp)}
                        />
                        <div class="flex items-center justify-between mt-2">
                            <button
                                type="button"
                                onclick={on_resend}
                                disabled={resend.is_loading()}
                                class="text-sm text-neutral-700 dark:text-neutral-300 hover:underline disabled:opacity-50"
                            >
                                {if resend.is_loading() {
                                    Label::Resending.text(lang)
                                } else {
                                    Label::ResendOtp.text(lang)
                                }}
                            </button>
                        </div>
                        if let Some(message) = resend.success_message(lang) {
                            <p class="text-xs text-green-700 dark:text-green-300 mt-1">{message}</p>
                        }
                        if let Some(message) = resend.error_message(lang) {
                            <p class="text-xs text-red-600 dark:text-red-400 mt-1">{message}</p>
                        }
                    </div>

                    <TextField
                        id="password"
                        input_type="password"
                        label={Label::NewPassword.text(lang)}
                        placeholder={Label::EnterNewPassword.text(lang)}
                        value={view.fields().password.clone()}
                        hint={Label::PasswordHint.text(lang)}
                        error={error(Field::Password)}
                        disabled={loading}
                        oninput={input(Field::Password)}
                        onblur={blur(Field::Password)}
                    />

                    <TextField
                        id="confirm_password"
                        input_type="password"
                        label={Label::ConfirmPassword.text(lang)}
                        placeholder={Label::EnterConfirmPassword.text(lang)}
                        value={view.fields().confirm_password.clone()}
                        error={error(Field::ConfirmPassword)}
                        disabled={loading}
                        oninput={input(Field::ConfirmPassword)}
                        onblur={blur(Field::ConfirmPassword)}
                    />
                    if let Some(mismatch) = view.mismatch_message(lang) {
                        <p class="text-xs text-red-600 dark:text-red-400">{mismatch}</p>
                    }

                    <button type="submit" disabled={!can_submit} class={SUBMIT_BUTTON}>
                        {if loading {
                            Label::Submitting.text(lang)
                        } else {
                            Label::Submit.text(lang)
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
