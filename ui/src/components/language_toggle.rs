use crate::State;
use portal::{Label, Language};
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[derive(Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Switches between English and Arabic. A `?lang=ar` query parameter picks
/// the initial language.
#[function_component]
pub fn LanguageToggle() -> Html {
    let (state, dispatch) = use_store::<State>();
    let location = use_location();

    {
        let dispatch = dispatch.clone();
        let requested = location
            .and_then(|l| l.query::<LangQuery>().ok())
            .and_then(|q| q.lang)
            .and_then(|lang| Language::parse(&lang));
        use_effect_with((), move |_| {
            if let Some(language) = requested {
                dispatch.reduce_mut(|state| state.language = language);
            }
        });
    }

    let onclick = dispatch.reduce_mut_callback(|state| state.toggle_language());

    html! {
        <button
            type="button"
            onclick={onclick}
            class="px-3 py-1 rounded-md border border-neutral-300 dark:border-neutral-600
                   text-sm font-medium hover:bg-neutral-100 dark:hover:bg-neutral-800"
        >
            {Label::LanguageButton.text(state.language)}
        </button>
    }
}
