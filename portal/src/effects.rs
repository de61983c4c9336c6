use crate::set_password::SetPasswordQuery;
use derive_more::Display;
use payloads::requests::{
    CompanyRegistration, LoginRequest, LogoFile, SendOtpRequest,
    SetPasswordRequest,
};
use payloads::responses::{LoginResponse, PortalMessage, SignupResponse};
use payloads::{ClientError, CompanyId};
use std::time::Duration;

/// Identifies one outstanding call or timer of a form. Results carrying any
/// other ticket than the one the form waits for are stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("#{_0}")]
pub struct Ticket(u64);

/// Pages a form can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Signup,
    Login,
    ForgotPassword,
    SetPassword(SetPasswordQuery),
    Home,
}

/// One backend operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    SignUp(CompanyRegistration),
    UploadLogo {
        company_id: CompanyId,
        logo: LogoFile,
    },
    Login(LoginRequest),
    ForgetPassword(SendOtpRequest),
    ResendOtp(SendOtpRequest),
    SetPassword(SetPasswordRequest),
}

/// Successful result of a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    SignedUp(SignupResponse),
    LoggedIn(LoginResponse),
    Message(PortalMessage),
}

/// Work a form asks its host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Perform the request, then hand the result to [`Form::on_reply`].
    Call { ticket: Ticket, request: Request },
    /// Call [`Form::on_wake`] with the ticket once `after` has elapsed.
    Wake { ticket: Ticket, after: Duration },
    Navigate { view: View, after: Duration },
    /// Persist a bearer token in the session store.
    SaveToken(String),
}

pub trait Form {
    type Msg;

    /// Apply a user action.
    fn update(&mut self, msg: Self::Msg) -> Vec<Effect>;

    /// Apply the result of an [`Effect::Call`].
    fn on_reply(
        &mut self,
        ticket: Ticket,
        reply: Result<Reply, ClientError>,
    ) -> Vec<Effect>;

    /// A timer requested through [`Effect::Wake`] fired.
    fn on_wake(&mut self, _ticket: Ticket) -> Vec<Effect> {
        Vec::new()
    }

    /// The page hosting the form went away; nothing arriving afterwards may
    /// change it.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// Ticket issuing and teardown state shared by every form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lifecycle {
    last: u64,
    disposed: bool,
}

impl Lifecycle {
    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_unique_and_increasing() {
        let mut lifecycle = Lifecycle::default();
        let a = lifecycle.issue();
        let b = lifecycle.issue();
        assert!(b > a);
        assert_eq!(a.to_string(), "#1");
    }
}
