use std::fmt::Display;

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

mod create;
mod delete;
mod fork;
mod issues;
mod pull_request;
mod push;
mod watch;

pub use create::*;
pub use delete::*;
pub use fork::*;
pub use issues::*;
pub use pull_request::*;
pub use push::*;
pub use watch::*;

/// One entry of the `/users/<username>/events` list.
///
/// The payload is kept as raw JSON: its shape depends on [`Event::kind`], and it is only decoded
/// when someone asks for it through [`Event::payload`].
#[derive(Debug, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventType,
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
pub struct EventRepo {
    /// `owner/name` of the repository
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EventType {
    Create,
    Delete,
    Fork,
    Issues,
    PullRequest,
    Push,
    Watch,
    Other(String),
}

impl From<String> for EventType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "CreateEvent" => Self::Create,
            "DeleteEvent" => Self::Delete,
            "ForkEvent" => Self::Fork,
            "IssuesEvent" => Self::Issues,
            "PullRequestEvent" => Self::PullRequest,
            "PushEvent" => Self::Push,
            "WatchEvent" => Self::Watch,
            _ => Self::Other(name),
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Create => "CreateEvent",
            Self::Delete => "DeleteEvent",
            Self::Fork => "ForkEvent",
            Self::Issues => "IssuesEvent",
            Self::PullRequest => "PullRequestEvent",
            Self::Push => "PushEvent",
            Self::Watch => "WatchEvent",
            Self::Other(name) => name,
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum EventPayload {
    Create(CreatePayload),
    Delete(DeletePayload),
    Fork(ForkPayload),
    Issues(IssuesPayload),
    PullRequest(PullRequestPayload),
    Push(PushPayload),
    Watch(WatchPayload),
}

/// What a create or delete event applies to. A missing `ref_type` decodes as an empty
/// [`RefType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RefType {
    Branch,
    Repository,
    Tag,
    Other(String),
}

impl From<String> for RefType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "branch" => Self::Branch,
            "repository" => Self::Repository,
            "tag" => Self::Tag,
            _ => Self::Other(name),
        }
    }
}

impl Default for RefType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl Event {
    /// Decodes the payload according to the event type.
    ///
    /// Returns `None` for event types we don't know about, and for payloads that don't have the
    /// expected shape: a single odd event shouldn't prevent the others from being shown.
    pub fn payload(&self) -> Option<EventPayload> {
        let payload = &self.payload;
        let decoded = match &self.kind {
            EventType::Create => CreatePayload::deserialize(payload).map(EventPayload::Create),
            EventType::Delete => DeletePayload::deserialize(payload).map(EventPayload::Delete),
            EventType::Fork => ForkPayload::deserialize(payload).map(EventPayload::Fork),
            EventType::Issues => IssuesPayload::deserialize(payload).map(EventPayload::Issues),
            EventType::PullRequest => {
                PullRequestPayload::deserialize(payload).map(EventPayload::PullRequest)
            }
            EventType::Push => PushPayload::deserialize(payload).map(EventPayload::Push),
            EventType::Watch => WatchPayload::deserialize(payload).map(EventPayload::Watch),
            EventType::Other(name) => {
                trace!("no payload decoder for event type `{}`", name);
                return None;
            }
        };

        match decoded {
            Ok(payload) => Some(payload),
            Err(e) => {
                trace!(
                    "couldn't decode {} payload in {}: {}",
                    self.kind,
                    self.repo.name,
                    e
                );
                None
            }
        }
    }
}
