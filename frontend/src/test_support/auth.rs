use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::{SignInError, SignInRequest};
use crate::state::sign_in::AuthService;

type Outcome = Result<(), SignInError>;

enum Reply {
    Ready(Outcome),
    Deferred(oneshot::Receiver<Outcome>),
}

/// Canned authentication service; replies are consumed in call order.
#[derive(Default)]
pub struct StubAuthService {
    calls: RefCell<Vec<SignInRequest>>,
    replies: RefCell<VecDeque<Reply>>,
}

impl StubAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, outcome: Outcome) {
        self.replies.borrow_mut().push_back(Reply::Ready(outcome));
    }

    /// Queues a reply that stays pending until the sender fires.
    pub fn defer(&self) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Deferred(rx));
        tx
    }

    pub fn calls(&self) -> Vec<SignInRequest> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl AuthService for StubAuthService {
    async fn sign_in(&self, request: SignInRequest) -> Outcome {
        self.calls.borrow_mut().push(request);
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(outcome)) => outcome,
            Some(Reply::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(SignInError::transport("stub sender dropped"))),
            None => Err(SignInError::transport("no stubbed reply")),
        }
    }
}
