use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub value: AttrValue,
    /// Shown under the input when set.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub onblur: Callback<()>,
}

/// A labelled input with an optional validation message.
#[function_component]
pub fn TextField(props: &Props) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };
    let onblur = props.onblur.reform(|_: FocusEvent| ());

    let border = if props.error.is_some() {
        "border-red-400 dark:border-red-600"
    } else {
        "border-neutral-300 dark:border-neutral-600"
    };

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {props.label.clone()}
            </label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                oninput={oninput}
                onblur={onblur}
                class={classes!(
                    "w-full", "px-3", "py-2", "border", "rounded-md",
                    "bg-white", "dark:bg-neutral-900", "text-neutral-900", "dark:text-white",
                    "focus:outline-none", "focus:ring-2", "focus:ring-neutral-500",
                    border
                )}
            />
            if let Some(hint) = &props.hint {
                <p class="text-xs text-neutral-500 dark:text-neutral-500 mt-1">{hint.clone()}</p>
            }
            if let Some(error) = &props.error {
                <p class="text-xs text-red-600 dark:text-red-400 mt-1">{error.clone()}</p>
            }
        </div>
    }
}
