use crate::types::{PhaseLabel, PillarLabel};
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Classification (output)
// ---------------------------------------------------------------------------

/// The (phase, pillar) pair derived from an issue title.
///
/// `phase` without `pillar` marks a phase-overview issue; neither means the
/// title matched no recognized shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub phase: Option<PhaseLabel>,
    pub pillar: Option<PillarLabel>,
}

impl Classification {
    pub fn is_phase_overview(&self) -> bool {
        self.phase.is_some() && self.pillar.is_none()
    }

    pub fn is_undetermined(&self) -> bool {
        self.phase.is_none()
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

static PHASE_PILLAR_RE: OnceLock<Regex> = OnceLock::new();
static PHASE_RE: OnceLock<Regex> = OnceLock::new();

fn phase_pillar_re() -> &'static Regex {
    PHASE_PILLAR_RE.get_or_init(|| Regex::new(r"Phase\s+(\d+)\s*-\s*Pillar\s+(\d+)").unwrap())
}

fn phase_re() -> &'static Regex {
    PHASE_RE.get_or_init(|| Regex::new(r"Phase\s+(\d+)").unwrap())
}

/// Extract phase and pillar from an issue title.
///
/// Shapes recognized, in order:
/// 1. "Phase N - Pillar M: ..." -> both labels
/// 2. "Phase N: ..."            -> phase only (overview issue)
/// 3. anything else             -> neither
pub fn classify(title: &str) -> Classification {
    if let Some(caps) = phase_pillar_re().captures(title) {
        let phase = parse_num(&caps[1]).map(PhaseLabel);
        let pillar = parse_num(&caps[2]).map(PillarLabel);
        if let (Some(_), Some(_)) = (phase, pillar) {
            return Classification { phase, pillar };
        }
    }

    if let Some(caps) = phase_re().captures(title) {
        if let Some(n) = parse_num(&caps[1]) {
            return Classification {
                phase: Some(PhaseLabel(n)),
                pillar: None,
            };
        }
    }

    Classification {
        phase: None,
        pillar: None,
    }
}

/// Digit runs longer than a u32 (absurd titles) fall through to "no match".
fn parse_num(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
