use base64::{Engine as _, engine::general_purpose};
use payloads::requests::LogoFile;
use portal::{Label, Language};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub language: Language,
    /// The currently chosen logo, if any.
    pub selected: Option<LogoFile>,
    pub on_select: Callback<LogoFile>,
    pub on_clear: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Picks an image file and reads it into memory. Nothing is uploaded until
/// the company has been registered.
#[function_component]
pub fn LogoPicker(props: &Props) -> Html {
    let file_input_ref = use_node_ref();

    let on_file_select = {
        let on_select = props.on_select.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(e) => {
                    tracing::error!(?e, "cannot create file reader");
                    return;
                }
            };
            let reader_clone = reader.clone();
            let on_select = on_select.clone();
            let file_name = file.name();
            let content_type = file.type_();

            let onload = Closure::wrap(Box::new(move |_: Event| {
                let Ok(result) = reader_clone.result() else {
                    tracing::error!("failed to read logo file");
                    return;
                };
                let data = js_sys::Uint8Array::new(&result).to_vec();
                on_select.emit(LogoFile {
                    file_name: file_name.clone(),
                    content_type: content_type.clone(),
                    data,
                });
            }) as Box<dyn FnMut(_)>);

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            if let Err(e) = reader.read_as_array_buffer(&file) {
                tracing::error!(?e, "failed to read logo file");
            }
            onload.forget();
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            on_clear.emit(());
        })
    };

    let preview = props.selected.as_ref().map(|logo| {
        format!(
            "data:{};base64,{}",
            logo.content_type,
            general_purpose::STANDARD.encode(&logo.data)
        )
    });

    html! {
        <div>
            <label for="logo" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {Label::CompanyLogo.text(props.language)}
            </label>
            <input
                ref={file_input_ref}
                id="logo"
                type="file"
                accept="image/*"
                onchange={on_file_select}
                disabled={props.disabled}
                class="block w-full text-sm text-neutral-700 dark:text-neutral-300"
                title={Label::UploadLogo.text(props.language)}
            />
            if let (Some(logo), Some(preview)) = (&props.selected, preview) {
                <div class="flex items-center gap-3 mt-2">
                    <img src={preview} alt={logo.file_name.clone()} class="w-24 h-16 object-contain rounded" />
                    <span class="text-xs text-neutral-500">
                        {format!("{} {}", Label::LogoSelected.text(props.language), logo.file_name)}
                    </span>
                    <button
                        type="button"
                        onclick={on_clear}
                        disabled={props.disabled}
                        class="text-xs text-red-600 hover:underline"
                    >
                        {"×"}
                    </button>
                </div>
            }
        </div>
    }
}
