use portal::Language;
use yewdux::prelude::*;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Language every page renders in. Forms keep their messages
    /// language-neutral, so switching only re-renders.
    pub language: Language,
}

impl State {
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}
