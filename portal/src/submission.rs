use crate::{Label, Language, Ticket, translate};
use payloads::ClientError;

/// A message shown to the user, kept language-neutral so that switching the
/// language re-renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Label(Label),
    /// Text coming from the backend, translated when it is a known message.
    Server(String),
}

impl Notice {
    pub fn render(&self, language: Language) -> String {
        match self {
            Self::Label(label) => label.text(language).to_string(),
            Self::Server(message) => translate::translate(message, language),
        }
    }
}

impl From<&ClientError> for Notice {
    fn from(error: &ClientError) -> Self {
        Self::Server(error.message())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Waiting for the call with this ticket.
    Submitting(Ticket),
    Succeeded,
    Failed,
}

/// Outcome of the last submission of a form. At most one of `error` and
/// `success` is set, and neither while a call is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    phase: Phase,
    error: Option<Notice>,
    success: Option<Notice>,
}

impl SubmissionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    /// A new submission is accepted unless one is in flight or the last one
    /// succeeded. Editing the form after a success re-enables it.
    pub fn can_submit(&self) -> bool {
        !matches!(self.phase, Phase::Submitting(_) | Phase::Succeeded)
    }

    pub fn is_waiting_for(&self, ticket: Ticket) -> bool {
        self.phase == Phase::Submitting(ticket)
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }

    pub fn success(&self) -> Option<&Notice> {
        self.success.as_ref()
    }

    pub fn error_message(&self, language: Language) -> Option<String> {
        self.error.as_ref().map(|notice| notice.render(language))
    }

    pub fn success_message(&self, language: Language) -> Option<String> {
        self.success.as_ref().map(|notice| notice.render(language))
    }

    /// Clears previous messages and waits for `ticket`.
    pub fn start(&mut self, ticket: Ticket) {
        self.phase = Phase::Submitting(ticket);
        self.error = None;
        self.success = None;
    }

    pub fn succeed(&mut self, notice: Notice) {
        self.phase = Phase::Succeeded;
        self.error = None;
        self.success = Some(notice);
    }

    pub fn fail(&mut self, notice: Notice) {
        self.phase = Phase::Failed;
        self.success = None;
        self.error = Some(notice);
    }

    /// A finished submission goes back to idle once the user edits the form.
    pub fn on_edit(&mut self) {
        if matches!(self.phase, Phase::Succeeded | Phase::Failed) {
            *self = Self::default();
        }
    }
}
