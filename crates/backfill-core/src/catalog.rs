use crate::types::{PhaseLabel, PillarLabel};

// ---------------------------------------------------------------------------
// PhaseInfo
// ---------------------------------------------------------------------------

/// Static metadata for one configured delivery phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseInfo {
    pub version: &'static str,
    pub objective: &'static str,
    /// Display names for Pillar 1..3, in order.
    pub pillars: [&'static str; 3],
}

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

static PHASES: &[(u32, PhaseInfo)] = &[
    (
        1,
        PhaseInfo {
            version: "v0.11.0",
            objective: "Brand & Distribution Layer",
            pillars: [
                "Intake & Pipeline (Open Graph + Contact Flow)",
                "Production Infrastructure",
                "Documentation & Transparency",
            ],
        },
    ),
    (
        2,
        PhaseInfo {
            version: "v1.1.0–1.3.0",
            objective: "Operationalize Audits",
            pillars: [
                "Authentication & Audit Requests (v1.1.0)",
                "Client Dashboard (v1.2.0)",
                "Payment & Automation (v1.3.0)",
            ],
        },
    ),
    (
        3,
        PhaseInfo {
            version: "v2.0.0–2.2.0",
            objective: "Productize Security",
            pillars: [
                "Public API (v2.0.0)",
                "Continuous Security (v2.1.0)",
                "Enterprise Layer (v2.2.0)",
            ],
        },
    ),
];

/// Milestone chain leading into each (phase, pillar) deliverable track.
static CHAINS: &[((u32, u32), [&'static str; 3])] = &[
    ((1, 1), ["Brand Foundation", "Contact System", "Intake Pipeline"]),
    ((1, 2), ["Database", "Session Layer", "Monitoring"]),
    ((1, 3), ["Architecture Docs", "API Contracts", "Transparency"]),
    ((2, 1), ["User Auth", "Email Infrastructure", "Audit Intake Form"]),
    ((2, 2), ["Auth Complete", "Dashboard UI", "Report Viewer"]),
    ((2, 3), ["Dashboard Ready", "Stripe Integration", "Payments"]),
    ((3, 1), ["Auth Complete", "API Foundation", "SDKs & Tools"]),
    ((3, 2), ["API Complete", "Repository Watching", "Analytics"]),
    ((3, 3), ["API & Automation", "SAML SSO", "Compliance Docs"]),
];

/// Issue number of each phase's overview issue.
static OVERVIEW_ISSUES: &[(u32, u64)] = &[(1, 64), (2, 114), (3, 149)];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn phase_info(phase: PhaseLabel) -> Option<&'static PhaseInfo> {
    PHASES
        .iter()
        .find(|(n, _)| *n == phase.number())
        .map(|(_, info)| info)
}

pub fn pillar_name(phase: PhaseLabel, pillar: PillarLabel) -> Option<&'static str> {
    let info = phase_info(phase)?;
    let idx = pillar.number().checked_sub(1)? as usize;
    info.pillars.get(idx).copied()
}

pub fn dependency_chain(
    phase: PhaseLabel,
    pillar: PillarLabel,
) -> Option<&'static [&'static str; 3]> {
    CHAINS
        .iter()
        .find(|(key, _)| *key == (phase.number(), pillar.number()))
        .map(|(_, chain)| chain)
}

pub fn overview_issue(phase: PhaseLabel) -> Option<u64> {
    OVERVIEW_ISSUES
        .iter()
        .find(|(n, _)| *n == phase.number())
        .map(|(_, num)| *num)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
