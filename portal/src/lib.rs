//! Form logic of the company portal: validation, bilingual messages and the
//! submission state machines behind the signup, login, forgot-password and
//! set-password pages.
//!
//! Forms never perform I/O. Updating a form returns [`Effect`]s that the host
//! (the web front end, or [`settle`] in tests) executes, feeding results back
//! through [`Form::on_reply`] and [`Form::on_wake`].

pub mod config;
pub mod effects;
pub mod forgot_password;
pub mod gateway;
pub mod labels;
pub mod language;
pub mod login;
pub mod session;
pub mod set_password;
pub mod signup;
pub mod submission;
pub mod translate;
pub mod validation;

#[cfg(test)]
mod testing;

pub use config::Timings;
pub use effects::{Effect, Form, Lifecycle, Reply, Request, Ticket, View};
pub use gateway::{Gateway, run, settle};
pub use labels::Label;
pub use language::Language;
pub use submission::{Notice, Phase, SubmissionState};
