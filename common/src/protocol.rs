use serde::{Deserialize, Serialize};

/// Result of revealing a cell. `Mine` ends the session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RevealOutcome {
    Safe,
    Mine,
}

impl RevealOutcome {
    pub fn is_mine(&self) -> bool {
        matches!(self, RevealOutcome::Mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mine_is_mine() {
        assert!(RevealOutcome::Mine.is_mine());
        assert!(!RevealOutcome::Safe.is_mine());
    }
}
