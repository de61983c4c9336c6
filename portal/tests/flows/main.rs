mod forgot_password;
mod login;
mod set_password;
mod signup;

use portal::{Effect, Timings, View};

/// The view a list of effects navigates to, if any.
pub fn navigation(effects: &[Effect]) -> Option<&View> {
    effects.iter().find_map(|effect| match effect {
        Effect::Navigate { view, .. } => Some(view),
        _ => None,
    })
}

pub fn timings() -> Timings {
    Timings::immediate()
}
