//! In-memory `Transport` for tests: replays canned responses in order and
//! records every request it was asked to send.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::transport::{ApiRequest, RawResponse, Transport};

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<RawResponse, String>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub fn reply_json(self, status: u16, body: &serde_json::Value) -> Self {
        self.reply(status, &body.to_string())
    }

    pub fn fail(self, error: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(error.to_owned()));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_paths(&self) -> Vec<&'static str> {
        self.sent.borrow().iter().map(|r| r.path).collect()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, String> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply".to_owned()))
    }
}

/// JSON envelope with the given `data`.
pub fn envelope(code: u16, data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "status": "success", "code": code, "data": data, "message": "ok" })
}

/// Identity JSON for a user with the given role.
pub fn identity_json(role: &str) -> serde_json::Value {
    serde_json::json!({ "userId": "u-1", "fullName": "Ada Tiger", "email": "a@depauw.edu", "role": role })
}
