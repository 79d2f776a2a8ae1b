use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use crate::domain::{MatchmakingBackend, MatchmakingError, MatchmakingResult, ResourceMapping};
use crate::interface_adapters::decoder::{UnknownFields, decode_matchmaking_response};

// Fixed deployment values for deterministic use-case tests.
pub(crate) struct FixedResources {
    pub(crate) region: &'static str,
    pub(crate) resource_id: &'static str,
}

impl FixedResources {
    pub(crate) fn deployed() -> Self {
        Self {
            region: "us-west-2",
            resource_id: "abc123",
        }
    }
}

impl ResourceMapping for FixedResources {
    fn default_region(&self) -> String {
        self.region.to_string()
    }

    fn resource_name_id(&self, logical_name: &str) -> String {
        if logical_name == "MPSMatchmaking" {
            self.resource_id.to_string()
        } else {
            String::new()
        }
    }
}

// Scripted backend reply; bodies go through the real decoder.
pub(crate) enum Reply {
    Body(&'static str),
    Fail(MatchmakingError),
}

// Backend fake recording every endpoint it was asked to call.
#[derive(Clone, Default)]
pub(crate) struct RecordingBackend {
    calls: Arc<Mutex<Vec<Url>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

impl RecordingBackend {
    pub(crate) fn replying(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Url> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl MatchmakingBackend for RecordingBackend {
    async fn request_matchmaking(
        &self,
        endpoint: Url,
    ) -> Result<MatchmakingResult, MatchmakingError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(endpoint);

        let reply = self
            .replies
            .lock()
            .expect("replies mutex poisoned")
            .pop_front();

        match reply {
            Some(Reply::Body(body)) => {
                decode_matchmaking_response(body.as_bytes(), UnknownFields::Ignore)
            }
            Some(Reply::Fail(error)) => Err(error),
            None => Err(MatchmakingError::Transport {
                message: "no scripted reply".to_string(),
            }),
        }
    }
}
