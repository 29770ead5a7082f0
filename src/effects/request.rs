//! Side-effect requests emitted by `update`.

use serde::{Deserialize, Serialize};

/// Menu sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Confirm,
    Cancel,
}

/// Why the session asks to be suspended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuspendReason {
    Pause,
    /// Pause with the quit prompt open.
    Quit,
}

/// Work the caller must carry out after an `update`.
///
/// Requests are listed in the order they were raised within the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectRequest {
    PlayCue(Cue),
    /// Leave the menu and pop it off the caller's mode stack.
    ExitSession,
    /// Push a pause mode over the menu.
    Suspend(SuspendReason),
}

/// Requests raised during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    requests: Vec<EffectRequest>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: EffectRequest) {
        self.requests.push(request);
    }

    pub fn play(&mut self, cue: Cue) {
        self.push(EffectRequest::PlayCue(cue));
    }

    pub fn contains(&self, request: EffectRequest) -> bool {
        self.requests.contains(&request)
    }

    pub fn count(&self, request: EffectRequest) -> usize {
        self.requests.iter().filter(|r| **r == request).count()
    }

    pub fn exit_requested(&self) -> bool {
        self.contains(EffectRequest::ExitSession)
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EffectRequest> {
        self.requests.iter()
    }

    pub fn as_slice(&self) -> &[EffectRequest] {
        &self.requests
    }
}

impl IntoIterator for Effects {
    type Item = EffectRequest;
    type IntoIter = std::vec::IntoIter<EffectRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.into_iter()
    }
}

impl<'a> IntoIterator for &'a Effects {
    type Item = &'a EffectRequest;
    type IntoIter = std::slice::Iter<'a, EffectRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}
