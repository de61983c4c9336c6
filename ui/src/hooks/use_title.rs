use crate::State;
use portal::Label;
use yew::prelude::*;
use yewdux::prelude::*;

/// Sets the document title in the current language. No cleanup on unmount
/// since each page sets its own title, and unmount/mount ordering isn't
/// guaranteed during route transitions.
#[hook]
pub fn use_title(label: Label) {
    let (state, _) = use_store::<State>();
    let title = label.text(state.language).to_string();
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
