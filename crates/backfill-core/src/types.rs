use std::fmt;

// ---------------------------------------------------------------------------
// PhaseLabel
// ---------------------------------------------------------------------------

/// A phase reference extracted from an issue title, e.g. "Phase 2".
///
/// Any number can appear in a title; only phases present in the catalog
/// resolve to metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseLabel(pub u32);

impl PhaseLabel {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phase {}", self.0)
    }
}

// ---------------------------------------------------------------------------
// PillarLabel
// ---------------------------------------------------------------------------

/// A pillar reference extracted from an issue title, e.g. "Pillar 3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PillarLabel(pub u32);

impl PillarLabel {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PillarLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pillar {}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
