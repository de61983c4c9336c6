pub mod language_toggle;
pub mod logo_picker;
pub mod notice;
pub mod text_field;

pub use language_toggle::LanguageToggle;
pub use logo_picker::LogoPicker;
pub use notice::{ErrorNotice, SuccessNotice};
pub use text_field::TextField;
