use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: Option<String>,
}

#[function_component]
pub fn ErrorNotice(props: &Props) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };
    html! {
        <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-md p-3">
            // Joined server errors come one per line.
            {for message.lines().map(|line| html! {
                <p class="text-sm text-red-800 dark:text-red-200">{line}</p>
            })}
        </div>
    }
}

#[function_component]
pub fn SuccessNotice(props: &Props) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };
    html! {
        <div class="bg-green-50 dark:bg-green-900/20 border border-green-200 dark:border-green-800 rounded-md p-3">
            <p class="text-sm text-green-800 dark:text-green-200">{message}</p>
        </div>
    }
}
