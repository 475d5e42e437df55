use anyhow::Context;
use backfill_core::classifier::classify;
use backfill_core::description;
use backfill_core::tracker::{GhCli, IssueTracker};

/// The repository the pass runs against.
const REPO: &str = "Fused-Gaming/vln";

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub updated: usize,
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run() -> anyhow::Result<()> {
    let tracker = GhCli::new(REPO)?;
    execute(&tracker)?;
    Ok(())
}

/// One full scan-and-update pass over the tracker's open issues.
///
/// Per-issue skip decisions short-circuit the remaining stages for that
/// issue; a fetch that fails drops the item without counting it. Only the
/// initial listing failure aborts the pass.
pub fn execute(tracker: &dyn IssueTracker) -> anyhow::Result<Summary> {
    println!("🚀 Populating issues with descriptions...");

    let numbers = tracker
        .list_open()
        .context("failed to list open issues")?;

    let mut summary = Summary::default();

    for number in numbers {
        let Some(issue) = tracker.view(number)? else {
            continue;
        };

        if !issue.body.trim().is_empty() {
            println!("⏭️  Issue #{number}: Already has description");
            summary.skipped += 1;
            continue;
        }

        let classification = classify(&issue.title);

        let Some(phase) = classification.phase else {
            println!("⏭️  Issue #{number}: Could not determine phase");
            summary.skipped += 1;
            continue;
        };

        // Phase-overview issues are described by hand, never templated.
        let Some(pillar) = classification.pillar else {
            println!("⏭️  Issue #{number}: Phase overview issue");
            summary.skipped += 1;
            continue;
        };

        let Some(body) = description::render(&issue.title, phase, pillar) else {
            println!("⏭️  Issue #{number}: Could not generate description");
            summary.skipped += 1;
            continue;
        };

        if tracker.edit_body(number, &body)? {
            println!("✅ Issue #{number}: Updated with comprehensive description");
            summary.updated += 1;
        } else {
            println!("❌ Issue #{number}: Failed to update");
        }
    }

    println!(
        "\n✅ Complete! Updated {} issues, skipped {}",
        summary.updated, summary.skipped
    );

    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use backfill_core::tracker::Issue;
    use backfill_core::{BackfillError, Result};
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// In-memory tracker: issues keyed by number, edits recorded in order.
    #[derive(Default)]
    struct FakeTracker {
        issues: BTreeMap<u64, Issue>,
        fail_list: bool,
        unfetchable: Vec<u64>,
        uneditable: Vec<u64>,
        edits: RefCell<Vec<(u64, String)>>,
    }

    impl FakeTracker {
        fn with_issue(mut self, number: u64, title: &str, body: &str) -> Self {
            self.issues.insert(
                number,
                Issue {
                    number,
                    title: title.to_string(),
                    body: body.to_string(),
                },
            );
            self
        }
    }

    impl IssueTracker for FakeTracker {
        fn list_open(&self) -> Result<Vec<u64>> {
            if self.fail_list {
                return Err(BackfillError::ListFailed("boom".into()));
            }
            Ok(self.issues.keys().copied().collect())
        }

        fn view(&self, number: u64) -> Result<Option<Issue>> {
            if self.unfetchable.contains(&number) {
                return Ok(None);
            }
            Ok(self.issues.get(&number).cloned())
        }

        fn edit_body(&self, number: u64, body: &str) -> Result<bool> {
            if self.uneditable.contains(&number) {
                return Ok(false);
            }
            self.edits.borrow_mut().push((number, body.to_string()));
            Ok(true)
        }
    }

    #[test]
    fn updates_blank_pillar_issue() {
        let tracker =
            FakeTracker::default().with_issue(202, "Phase 2 - Pillar 3: Stripe Integration", "");

        let summary = execute(&tracker).unwrap();
        assert_eq!(summary, Summary { updated: 1, skipped: 0 });

        let edits = tracker.edits.borrow();
        assert_eq!(edits.len(), 1);
        let (number, body) = &edits[0];
        assert_eq!(*number, 202);
        assert!(body.contains("Phase 2 - Payment & Automation (v1.3.0)"));
        assert!(body.contains("Dashboard Ready → Stripe Integration → Payments"));
    }

    #[test]
    fn skips_issue_with_existing_body() {
        let tracker = FakeTracker::default().with_issue(
            10,
            "Phase 1 - Pillar 1: Contact Flow",
            "already written up",
        );

        let summary = execute(&tracker).unwrap();
        assert_eq!(summary, Summary { updated: 0, skipped: 1 });
        assert!(tracker.edits.borrow().is_empty());
    }

    #[test]
    fn whitespace_only_body_counts_as_blank() {
        let tracker =
            FakeTracker::default().with_issue(11, "Phase 1 - Pillar 2: Monitoring", "  \n\t");

        let summary = execute(&tracker).unwrap();
        assert_eq!(summary.updated, 1);
    }

    #[test]
    fn skips_phase_overview_issue() {
        let tracker = FakeTracker::default().with_issue(64, "Phase 1: Overview", "");

        let summary = execute(&tracker).unwrap();
        assert_eq!(summary, Summary { updated: 0, skipped: 1 });
        assert!(tracker.edits.borrow().is_empty());
    }

    #[test]
    fn skips_undetermined_title() {
        let tracker = FakeTracker::default().with_issue(5, "Random Task", "");

        let summary = execute(&tracker).unwrap();
        assert_eq!(summary, Summary { updated: 0, skipped: 1 });
        assert!(tracker.edits.borrow().is_empty());
    }

    #[test]
    fn skips_unconfigured_phase() {
        let tracker =
            FakeTracker::default().with_issue(7, "Phase 9 - Pillar 1: Quantum Audits", "");

        let summary = execute(&tracker).unwrap();
        assert_eq!(summary, Summary { updated: 0, skipped: 1 });
        assert!(tracker.edits.borrow().is_empty());
    }

    #[test]
    fn unfetchable_issue_is_dropped_uncounted() {
        let mut tracker =
            FakeTracker::default().with_issue(1, "Phase 1 - Pillar 1: Contact Flow", "");
        tracker = tracker.with_issue(2, "Phase 1 - Pillar 2: Monitoring", "");
        tracker.unfetchable = vec![1];

        let summary = execute(&tracker).unwrap();
        assert_eq!(summary, Summary { updated: 1, skipped: 0 });
        assert_eq!(tracker.edits.borrow()[0].0, 2);
    }

    #[test]
    fn failed_edit_is_not_counted() {
        let mut tracker =
            FakeTracker::default().with_issue(3, "Phase 3 - Pillar 2: Analytics", "");
        tracker.uneditable = vec![3];

        let summary = execute(&tracker).unwrap();
        assert_eq!(summary, Summary { updated: 0, skipped: 0 });
        assert!(tracker.edits.borrow().is_empty());
    }

    #[test]
    fn listing_failure_aborts() {
        let tracker = FakeTracker {
            fail_list: true,
            ..Default::default()
        };

        let err = execute(&tracker).unwrap_err();
        assert!(err.to_string().contains("failed to list open issues"));
    }

    #[test]
    fn processes_full_mixed_batch() {
        let tracker = FakeTracker::default()
            .with_issue(64, "Phase 1: Overview", "")
            .with_issue(70, "Phase 1 - Pillar 1: Contact Flow", "")
            .with_issue(114, "Phase 2: Overview", "hand-written")
            .with_issue(120, "Phase 2 - Pillar 2: Report Viewer", "")
            .with_issue(200, "Chore: bump dependencies", "");

        let summary = execute(&tracker).unwrap();
        // 70 and 120 updated; 64 (overview), 114 (has body), 200 (no phase) skipped
        assert_eq!(summary, Summary { updated: 2, skipped: 3 });

        let edits = tracker.edits.borrow();
        let edited: Vec<u64> = edits.iter().map(|(n, _)| *n).collect();
        assert_eq!(edited, vec![70, 120]);
    }
}
