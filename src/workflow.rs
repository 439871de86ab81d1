//! The workflow gate in front of the seal and open paths.
//!
//! A [`Workflow`] is an explicit little state machine:
//!
//! ```text
//! Idle -> Validating -> Running -> (Succeeded | Failed) -> Idle
//! ```
//!
//! It enforces precondition ordering before any cryptography runs: the
//! password must be non-blank, a payload must be selected, and at most one
//! job may be in flight per instance. Terminal states immediately re-arm
//! to `Idle`.
//!
//! Each workflow is an independent value; run several side by side (say,
//! one for text and one for images) and they won't interfere. A request
//! owns its own salt, nonce, and key, so there's no shared mutable state
//! to lock.

use crate::encrypt::Password;
use crate::error::Error;
use tracing::debug;

/// Which way the payload flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, container out.
    Seal,
    /// Container in, plaintext out.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Validating,
    Running,
    Succeeded,
    Failed,
}

/// One seal/open session: a pending payload, the gate state, and the last
/// successful result.
#[derive(Debug)]
pub struct Workflow {
    state: State,
    payload: Option<Vec<u8>>,
    result: Option<Vec<u8>>,
}

impl Workflow {
    pub fn new() -> Self {
        Workflow {
            state: State::Idle,
            payload: None,
            result: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Stage the payload for the next request: plaintext bytes for a seal,
    /// container bytes for an open.
    ///
    /// Selecting a payload clears any result left over from an earlier
    /// request, so stale output can't be mistaken for a fresh one.
    pub fn select_payload(&mut self, bytes: Vec<u8>) {
        self.result = None;
        self.payload = Some(bytes);
    }

    pub fn clear_payload(&mut self) {
        self.result = None;
        self.payload = None;
    }

    /// The last successful request's output, if any.
    pub fn result(&self) -> Option<&[u8]> {
        self.result.as_deref()
    }

    /// Check the guards and admit a request, returning the [`Job`] to run.
    ///
    /// Guard order: a running workflow rejects with [`Error::Busy`] before
    /// anything else; then a blank password rejects with
    /// [`Error::EmptyPassword`]; then a missing payload rejects with
    /// [`Error::NoPayloadSelected`]. A guard rejection re-arms to `Idle`
    /// without invoking the cipher. The payload stays selected across
    /// requests, so retrying after a failure doesn't require reselection.
    pub fn begin(&mut self, direction: Direction, password: &Password) -> Result<Job, Error> {
        if self.state == State::Running {
            debug!(?direction, "request refused, already running");
            return Err(Error::Busy);
        }

        self.state = State::Validating;
        if password.is_blank() {
            self.state = State::Idle;
            return Err(Error::EmptyPassword);
        }
        let Some(payload) = self.payload.clone() else {
            self.state = State::Idle;
            return Err(Error::NoPayloadSelected);
        };

        self.state = State::Running;
        debug!(?direction, payload_len = payload.len(), "request admitted");
        Ok(Job { direction, payload })
    }

    /// Deliver a finished job's outcome and re-arm the gate.
    ///
    /// Success stores and returns the result buffer; failure clears any
    /// partial result and passes the error through. Either way the next
    /// request is accepted immediately afterwards.
    pub fn finish(&mut self, outcome: Result<Vec<u8>, Error>) -> Result<&[u8], Error> {
        let delivered = match outcome {
            Ok(bytes) => {
                debug!(result_len = bytes.len(), "request succeeded");
                self.state = State::Succeeded;
                self.result = Some(bytes);
                Ok(())
            }
            Err(err) => {
                debug!(?err, "request failed");
                self.state = State::Failed;
                self.result = None;
                Err(err)
            }
        };

        // Terminal states immediately re-arm for the next request.
        self.state = State::Idle;

        delivered.map(|()| self.result.as_deref().unwrap_or_default())
    }

    /// Run a whole request: begin, execute, finish.
    ///
    /// The KDF and cipher work happens inside [`Job::run`]; callers that
    /// want to offload it (and hold the gate `Running` meanwhile) can use
    /// [`begin`](Self::begin) and [`finish`](Self::finish) directly.
    pub fn run(&mut self, direction: Direction, password: Password) -> Result<&[u8], Error> {
        let job = self.begin(direction, &password)?;
        let outcome = job.run(password);
        self.finish(outcome)
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

/// An admitted request, holding its own copy of the payload.
///
/// While a job is outstanding its workflow stays `Running` and refuses new
/// requests; hand the outcome back via [`Workflow::finish`]. A job always
/// runs to completion or failure, there is no cancellation.
#[derive(Debug)]
#[must_use = "a job does nothing until run, and its workflow stays busy until finished"]
pub struct Job {
    direction: Direction,
    payload: Vec<u8>,
}

impl Job {
    /// Execute the seal or open path. This is the only long-running step
    /// and may be offloaded to a worker.
    pub fn run(self, password: Password) -> Result<Vec<u8>, Error> {
        match self.direction {
            Direction::Seal => crate::seal(password, &self.payload),
            Direction::Open => crate::open(password, &self.payload),
        }
    }
}
