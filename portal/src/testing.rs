use crate::{Gateway, Reply, Request};
use payloads::{ClientError, StatusCode};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Canned reply of a [`FakeGateway`].
pub enum Canned {
    Ok(Reply),
    Err(u16, &'static str),
}

/// Answers calls from a queue and records every request it receives.
#[derive(Default)]
pub struct FakeGateway {
    replies: RefCell<VecDeque<Canned>>,
    calls: RefCell<Vec<Request>>,
}

impl FakeGateway {
    pub fn replying(replies: impl IntoIterator<Item = Canned>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    pub fn calls(&self) -> Vec<Request> {
        self.calls.borrow().clone()
    }
}

impl Gateway for FakeGateway {
    async fn call(&self, request: &Request) -> Result<Reply, ClientError> {
        self.calls.borrow_mut().push(request.clone());
        let canned = self.replies.borrow_mut().pop_front();
        match canned {
            Some(Canned::Ok(reply)) => Ok(reply),
            Some(Canned::Err(status, message)) => Err(ClientError::APIError(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
                message.to_string(),
            )),
            None => panic!("unexpected call: {request:?}"),
        }
    }
}

pub fn ok_message() -> Canned {
    Canned::Ok(Reply::Message(Default::default()))
}
