use std::io::{self, Write};

use tracing::trace;

use crate::github::{
    events::{CreatePayload, DeletePayload, IssuesPayload, PullRequestPayload, WatchPayload},
    Event, EventPayload, RefType,
};

/// Turns an event into a one-line description, or `None` if the event isn't worth showing.
pub fn describe(event: &Event) -> Option<String> {
    let repo = &event.repo.name;

    match event.payload()? {
        EventPayload::Create(payload) => describe_create(payload, repo),
        EventPayload::Delete(payload) => describe_delete(payload, repo),
        EventPayload::Fork(payload) => Some(format!(
            "Forked {} to {}",
            repo, payload.forkee.html_url
        )),
        EventPayload::Issues(payload) => describe_issues(payload, repo),
        EventPayload::PullRequest(payload) => describe_pull_request(payload, repo),
        EventPayload::Push(payload) => {
            Some(format!("Pushed {} commits to {}", payload.size, repo))
        }
        EventPayload::Watch(payload) => describe_watch(payload, repo),
    }
}

fn describe_create(payload: CreatePayload, repo: &str) -> Option<String> {
    match payload.ref_type {
        RefType::Repository => Some(format!("Created repository {}", repo)),
        // branches and tags come and go all the time
        _ => None,
    }
}

fn describe_delete(payload: DeletePayload, repo: &str) -> Option<String> {
    match payload.ref_type {
        RefType::Repository => Some(format!("Deleted repository {}", repo)),
        _ => None,
    }
}

fn describe_issues(payload: IssuesPayload, repo: &str) -> Option<String> {
    match payload.action.as_str() {
        "opened" => Some(format!("Opened a new issue in {}", repo)),
        _ => None,
    }
}

fn describe_pull_request(payload: PullRequestPayload, repo: &str) -> Option<String> {
    match payload.action.as_str() {
        "opened" => Some(format!("Opened a pull request in {}", repo)),
        _ => None,
    }
}

fn describe_watch(payload: WatchPayload, repo: &str) -> Option<String> {
    match payload.action.as_str() {
        "started" => Some(format!("Starred {}", repo)),
        _ => None,
    }
}

/// Writes the activity report for `username`.
///
/// Only the first `window` events are considered. Events are listed newest first by the API, the
/// report shows them in chronological order.
pub fn write_report<W: Write>(
    out: &mut W,
    username: &str,
    events: &[Event],
    window: usize,
) -> io::Result<()> {
    if events.is_empty() {
        writeln!(out, "No recent activity found for {}", username)?;
        return Ok(());
    }

    let recent = &events[..events.len().min(window)];
    writeln!(out, "Last {} activities for {}:", recent.len(), username)?;

    for event in recent.iter().rev() {
        match describe(event) {
            Some(line) => writeln!(out, "- {}", line)?,
            None => trace!("skipping {} in {}", event.kind, event.repo.name),
        }
    }

    Ok(())
}
