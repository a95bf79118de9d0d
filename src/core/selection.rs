//! Per-line decisions.

/// What the operator decided for a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decision {
    #[default]
    Undecided,
    Accepted,
    Rejected,
}

/// Decisions indexed by line position. Indices never set read as
/// [`Decision::Undecided`].
#[derive(Debug, Default)]
pub struct Selection {
    decisions: Vec<Decision>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision, replacing whatever was there before.
    pub fn set(&mut self, index: usize, decision: Decision) {
        if index >= self.decisions.len() {
            self.decisions.resize(index + 1, Decision::Undecided);
        }
        self.decisions[index] = decision;
    }

    pub fn get(&self, index: usize) -> Decision {
        self.decisions.get(index).copied().unwrap_or_default()
    }

    pub fn is_accepted(&self, index: usize) -> bool {
        self.get(index) == Decision::Accepted
    }
}
