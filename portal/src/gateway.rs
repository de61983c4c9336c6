use crate::effects::{Effect, Form, Reply, Request};
use payloads::{APIClient, ClientError};
use std::collections::VecDeque;

/// Something that can carry out portal requests. Implemented by
/// [`APIClient`]; tests substitute fakes.
pub trait Gateway {
    fn call(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<Reply, ClientError>>;
}

impl Gateway for APIClient {
    async fn call(&self, request: &Request) -> Result<Reply, ClientError> {
        tracing::debug!(?request, "calling portal api");
        match request {
            Request::SignUp(details) => {
                self.sign_up(details).await.map(Reply::SignedUp)
            }
            Request::UploadLogo { company_id, logo } => self
                .upload_logo(*company_id, logo)
                .await
                .map(Reply::Message),
            Request::Login(details) => {
                self.login(details).await.map(Reply::LoggedIn)
            }
            Request::ForgetPassword(details) => {
                self.forget_password(details).await.map(Reply::Message)
            }
            Request::ResendOtp(details) => {
                self.resend_otp(details).await.map(Reply::Message)
            }
            Request::SetPassword(details) => {
                self.set_password(details).await.map(Reply::Message)
            }
        }
    }
}

/// Execute every [`Effect::Call`] against the gateway, in order, feeding the
/// results back into the form. Returns the remaining effects (timers,
/// navigation, session writes) for the caller to handle.
pub async fn settle<F: Form, G: Gateway>(
    form: &mut F,
    gateway: &G,
    effects: Vec<Effect>,
) -> Vec<Effect> {
    let mut queue = VecDeque::from(effects);
    let mut remaining = Vec::new();
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::Call { ticket, request } => {
                let reply = gateway.call(&request).await;
                queue.extend(form.on_reply(ticket, reply));
            }
            other => remaining.push(other),
        }
    }
    remaining
}

/// Apply a message and settle the calls it triggers.
pub async fn run<F: Form, G: Gateway>(
    form: &mut F,
    gateway: &G,
    msg: F::Msg,
) -> Vec<Effect> {
    let effects = form.update(msg);
    settle(form, gateway, effects).await
}
