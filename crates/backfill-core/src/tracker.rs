//! Tracker access behind a small capability trait.
//!
//! The orchestrator only sees `IssueTracker`, so tests run against an
//! in-memory fake while production uses `GhCli`, which shells out to the
//! GitHub CLI and reuses its session for authentication.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::{BackfillError, Result};

/// Page size for the initial listing call.
pub const LIST_LIMIT: u32 = 300;

// ---------------------------------------------------------------------------
// Issue
// ---------------------------------------------------------------------------

/// A tracked issue as returned by `gh issue view --json title,body,number`.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// Empty when the issue has no description yet. `gh` emits `null` for
    /// some transferred issues, hence the nullable decode.
    #[serde(default, deserialize_with = "nullable_string")]
    pub body: String,
}

fn nullable_string<'de, D>(de: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// IssueTracker
// ---------------------------------------------------------------------------

/// The three tracker verbs the backfill pass needs.
pub trait IssueTracker {
    /// Enumerate open issue numbers, ascending. Failure here is fatal to
    /// the whole run.
    fn list_open(&self) -> Result<Vec<u64>>;

    /// Fetch one issue. `Ok(None)` means the fetch failed locally (already
    /// logged); the run continues with the next number.
    fn view(&self, number: u64) -> Result<Option<Issue>>;

    /// Overwrite the issue body. `Ok(false)` means the edit failed locally
    /// (already logged); last write wins, no retries.
    fn edit_body(&self, number: u64, body: &str) -> Result<bool>;
}

// ---------------------------------------------------------------------------
// GhCli
// ---------------------------------------------------------------------------

/// `IssueTracker` backed by the `gh` binary.
pub struct GhCli {
    repo: String,
}

impl GhCli {
    /// Errors when `gh` is not on PATH; authentication itself is left to
    /// the CLI's own session.
    pub fn new(repo: impl Into<String>) -> Result<Self> {
        which::which("gh").map_err(|_| BackfillError::GhNotFound)?;
        Ok(Self { repo: repo.into() })
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("gh");
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl IssueTracker for GhCli {
    fn list_open(&self) -> Result<Vec<u64>> {
        tracing::debug!(repo = %self.repo, limit = LIST_LIMIT, "gh issue list");
        let output = self
            .command()
            .args(["issue", "list", "--repo", &self.repo, "--state", "open"])
            .args(["--limit", &LIST_LIMIT.to_string()])
            .output()
            .map_err(|e| BackfillError::Spawn(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackfillError::ListFailed(stderr.trim().to_string()));
        }

        Ok(parse_list_output(&String::from_utf8_lossy(&output.stdout)))
    }

    fn view(&self, number: u64) -> Result<Option<Issue>> {
        tracing::debug!(repo = %self.repo, number, "gh issue view");
        let output = self
            .command()
            .args(["issue", "view", &number.to_string(), "--repo", &self.repo])
            .args(["--json", "title,body,number"])
            .output();

        let output = match output {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!(number, error = %e, "failed to spawn gh for issue view");
                return Ok(None);
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(number, stderr = %stderr.trim(), "failed to fetch issue");
            return Ok(None);
        }

        match serde_json::from_slice::<Issue>(&output.stdout) {
            Ok(issue) => Ok(Some(issue)),
            Err(e) => {
                tracing::warn!(number, error = %e, "unparseable issue view output");
                Ok(None)
            }
        }
    }

    fn edit_body(&self, number: u64, body: &str) -> Result<bool> {
        tracing::debug!(repo = %self.repo, number, bytes = body.len(), "gh issue edit");
        // Body goes over stdin so arbitrarily long descriptions never hit
        // argv length limits.
        let child = self
            .command()
            .args(["issue", "edit", &number.to_string(), "--repo", &self.repo])
            .args(["--body-file", "-"])
            .stdin(Stdio::piped())
            .spawn();

        let mut child = match child {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(number, error = %e, "failed to spawn gh for issue edit");
                return Ok(false);
            }
        };

        if let Some(stdin) = child.stdin.as_mut() {
            if let Err(e) = stdin.write_all(body.as_bytes()) {
                tracing::warn!(number, error = %e, "failed to write body to gh stdin");
                let _ = child.kill();
                let _ = child.wait();
                return Ok(false);
            }
        }

        match child.wait_with_output() {
            Ok(output) if output.status.success() => Ok(true),
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                tracing::warn!(number, stderr = %stderr.trim(), "failed to update issue");
                Ok(false)
            }
            Err(e) => {
                tracing::warn!(number, error = %e, "gh issue edit did not complete");
                Ok(false)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// List output parsing
// ---------------------------------------------------------------------------

/// Parse `gh issue list` tabular output: one issue per line, first
/// whitespace-delimited token is the numeric ID. Non-numeric lines are
/// ignored. Returns ascending, deduplicated numbers for deterministic
/// processing.
fn parse_list_output(stdout: &str) -> Vec<u64> {
    let mut numbers: Vec<u64> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|token| token.parse().ok())
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_basic() {
        let out = "202\tOPEN\tPhase 2 - Pillar 3: Stripe Integration\t2024-01-01\n\
                   64\tOPEN\tPhase 1: Overview\t2024-01-01\n";
        assert_eq!(parse_list_output(out), vec![64, 202]);
    }

    #[test]
    fn parse_list_skips_non_numeric_lines() {
        let out = "Showing 2 of 2 open issues\n\n12 OPEN Something\nno-id-here\n7 OPEN Other\n";
        assert_eq!(parse_list_output(out), vec![7, 12]);
    }

    #[test]
    fn parse_list_dedups() {
        assert_eq!(parse_list_output("5 a\n5 b\n3 c\n"), vec![3, 5]);
    }

    #[test]
    fn parse_list_empty() {
        assert!(parse_list_output("").is_empty());
        assert!(parse_list_output("\n  \n").is_empty());
    }

    #[test]
    fn issue_body_defaults_when_null() {
        let issue: Issue =
            serde_json::from_str(r#"{"number": 7, "title": "T", "body": null}"#).unwrap();
        assert_eq!(issue.body, "");
    }

    #[test]
    fn issue_decodes_view_json() {
        let issue: Issue = serde_json::from_str(
            r#"{"number": 202, "title": "Phase 2 - Pillar 3: Stripe Integration", "body": ""}"#,
        )
        .unwrap();
        assert_eq!(issue.number, 202);
        assert!(issue.body.is_empty());
    }
}
