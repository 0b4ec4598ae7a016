//! Lock that prevents a form from being submitted twice.

use std::{cell::RefCell, rc::Rc};

use crate::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Shared submission state of a single form.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    state: Rc<RefCell<SubmissionState>>,
}

/// Held while a submission is in flight.
///
/// Dropping it without settling releases the lock.
#[must_use = "the lock is released when dropped"]
#[derive(Debug)]
pub struct Pending {
    state: Rc<RefCell<SubmissionState>>,
    settled: bool,
}

impl Submission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        *self.state.borrow() == SubmissionState::Submitting
    }

    pub fn begin(&self) -> Result<Pending, Error> {
        let mut state = self.state.borrow_mut();
        if *state == SubmissionState::Submitting {
            return Err(Error::Busy);
        }
        *state = SubmissionState::Submitting;
        Ok(Pending {
            state: Rc::clone(&self.state),
            settled: false,
        })
    }

    /// Forget the outcome of the last submission.
    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        if *state != SubmissionState::Submitting {
            *state = SubmissionState::Idle;
        }
    }
}

impl Pending {
    pub fn succeed(mut self) {
        self.settle(SubmissionState::Succeeded);
    }

    pub fn fail(mut self, message: impl Into<String>) {
        self.settle(SubmissionState::Failed(message.into()));
    }

    fn settle(&mut self, state: SubmissionState) {
        *self.state.borrow_mut() = state;
        self.settled = true;
    }
}

impl Drop for Pending {
    fn drop(&mut self) {
        if !self.settled {
            *self.state.borrow_mut() = SubmissionState::Idle;
        }
    }
}
