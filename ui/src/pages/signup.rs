use portal::signup::{Field, Msg, SignupForm};
use portal::{Label, Timings};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use super::{CARD, SUBMIT_BUTTON};
use crate::components::{ErrorNotice, LogoPicker, SuccessNotice, TextField};
use crate::hooks::{use_form, use_title};
use crate::{Route, State};

#[function_component]
pub fn SignupPage() -> Html {
    let (state, _) = use_store::<State>();
    let lang = state.language;
    let form = use_form(|| SignupForm::new(Timings::from_build_env()));
    use_title(Label::SignupTitle);

    let onsubmit = form.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_select_logo = form.callback(Msg::SelectLogo);
    let on_clear_logo = form.callback(|()| Msg::ClearLogo);
    let input = |field: Field| form.callback(move |value| Msg::Edit(field, value));
    let blur = |field: Field| form.callback(move |()| Msg::Blur(field));

    let view = form.state();
    let loading = view.is_loading();
    let can_submit = view.can_submit();
    let fields = view.fields();
    let error = |field: Field| view.field_message(field, lang).map(AttrValue::from);

    // (field, id, input type, label, placeholder, value)
    let text_fields = [
        (Field::NameEn, "name_en", "text", Label::NameEn, Label::EnterNameEn, &fields.name_en),
        (Field::NameAr, "name_ar", "text", Label::NameAr, Label::EnterNameAr, &fields.name_ar),
        (Field::Email, "email", "email", Label::Email, Label::EnterEmail, &fields.email),
        (Field::PhoneNumber, "phone", "tel", Label::PhoneNumber, Label::EnterPhone, &fields.phone_number),
        (Field::WebsiteUrl, "website", "url", Label::WebsiteUrl, Label::EnterWebsite, &fields.website_url),
    ];

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {Label::SignupTitle.text(lang)}
                    </h1>
                </div>

                <form onsubmit={onsubmit} class={CARD}>
                    <ErrorNotice message={view.error_message(lang)} />
                    <SuccessNotice message={view.success_message(lang)} />

                    {for text_fields.into_iter().map(|(field, id, input_type, label, placeholder, value)| html! {
                        <TextField
                            id={id}
                            input_type={input_type}
                            label={label.text(lang)}
                            placeholder={placeholder.text(lang)}
                            value={value.clone()}
                            error={error(field)}
                            disabled={loading}
                            oninput={input(field)}
                            onblur={blur(field)}
                        />
                    })}

                    <LogoPicker
                        language={lang}
                        selected={view.logo().cloned()}
                        on_select={on_select_logo}
                        on_clear={on_clear_logo}
                        disabled={loading}
                    />

                    <button type="submit" disabled={!can_submit} class={SUBMIT_BUTTON}>
                        {if loading {
                            Label::Creating.text(lang)
                        } else {
                            Label::CreateAccount.text(lang)
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    {Label::HaveAccount.text(lang)}{" "}
                    <Link<Route> to={Route::Login} classes="font-medium hover:underline">
                        {Label::Login.text(lang)}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
