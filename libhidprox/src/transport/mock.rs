// libhidprox/src/transport/mock.rs

use std::collections::VecDeque;

use crate::protocol::{Command, Response, Status};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Queued reply; `Echo` takes the opcode of the request it answers.
#[derive(Debug)]
enum Reply {
    Echo(Status, Vec<u8>),
    Verbatim(Response),
    Fail(Error),
}

/// Mock transport for unit tests. It records sent requests and returns queued replies.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every request seen, in order: (command, payload, timeout_ms)
    pub sent: Vec<(Command, Vec<u8>, u64)>,
    replies: VecDeque<Reply>,
}

impl MockTransport {
    /// Empty mock; every send times out until replies are queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply that echoes whichever command is sent next.
    pub fn push_reply(&mut self, status: Status, data: Vec<u8>) {
        self.replies.push_back(Reply::Echo(status, data));
    }

    /// Queue a fully specified response, opcode included.
    pub fn push_response(&mut self, resp: Response) {
        self.replies.push_back(Reply::Verbatim(resp));
    }

    /// Queue a communication fault.
    pub fn push_error(&mut self, err: Error) {
        self.replies.push_back(Reply::Fail(err));
    }

    /// Replies not consumed yet.
    pub fn pending(&self) -> usize {
        self.replies.len()
    }

    /// Most recent request, if any.
    pub fn last_sent(&self) -> Option<&(Command, Vec<u8>, u64)> {
        self.sent.last()
    }
}

impl Transport for MockTransport {
    fn send_command(
        &mut self,
        command: Command,
        payload: &[u8],
        timeout_ms: u64,
    ) -> Result<Response> {
        self.sent.push((command, payload.to_vec(), timeout_ms));
        match self.replies.pop_front() {
            Some(Reply::Echo(status, data)) => Ok(Response::new(command, status, data)),
            Some(Reply::Verbatim(resp)) => Ok(resp),
            Some(Reply::Fail(err)) => Err(err),
            None => Err(Error::Timeout),
        }
    }
}
