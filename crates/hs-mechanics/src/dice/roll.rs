//! Dice roll results and hit counting.

use serde::{Deserialize, Serialize};

use super::is_hit;

/// The faces produced by rolling a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual faces, in roll order.
    pub faces: Vec<u32>,
}

impl RollResult {
    /// Number of faces that count as hits.
    pub fn hits(&self) -> u32 {
        self.faces.iter().filter(|&&f| is_hit(f)).count() as u32
    }

    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.faces.len()
    }

    /// Whether no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
        let hits = self.hits();
        let noun = if hits == 1 { "hit" } else { "hits" };
        write!(f, "[{}] => {hits} {noun}", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(faces: &[u32]) -> RollResult {
        RollResult {
            faces: faces.to_vec(),
        }
    }

    #[test]
    fn hits_count_fives_and_sixes() {
        assert_eq!(result(&[1, 2, 3, 4]).hits(), 0);
        assert_eq!(result(&[5, 6, 4, 5]).hits(), 3);
        assert_eq!(result(&[6]).hits(), 1);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.hits(), 0);
        assert_eq!(r.count(), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(result(&[3, 5, 6]).to_string(), "[3, 5, 6] => 2 hits");
        assert_eq!(result(&[5]).to_string(), "[5] => 1 hit");
        assert_eq!(result(&[]).to_string(), "[] => 0 hits");
    }
}
