//! A value held for each faction.

use hs_core::Faction;
use serde::{Deserialize, Serialize};

/// One value per side of a debate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sides<T> {
    /// The Protestant side's value.
    pub protestant: T,
    /// The Catholic side's value.
    pub catholic: T,
}

impl<T> Sides<T> {
    /// Pair up a Protestant and a Catholic value.
    pub fn new(protestant: T, catholic: T) -> Self {
        Self {
            protestant,
            catholic,
        }
    }

    /// The value for `faction`.
    pub fn get(&self, faction: Faction) -> &T {
        match faction {
            Faction::Protestant => &self.protestant,
            Faction::Catholic => &self.catholic,
        }
    }

    /// Mutable access to the value for `faction`.
    pub fn get_mut(&mut self, faction: Faction) -> &mut T {
        match faction {
            Faction::Protestant => &mut self.protestant,
            Faction::Catholic => &mut self.catholic,
        }
    }
}

impl<T: Clone> Sides<T> {
    /// The same value for both sides.
    pub fn both(value: T) -> Self {
        Self::new(value.clone(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_by_faction() {
        let mut s = Sides::new(1, 2);
        assert_eq!(*s.get(Faction::Protestant), 1);
        assert_eq!(*s.get(Faction::Catholic), 2);
        *s.get_mut(Faction::Catholic) = 5;
        assert_eq!(s.catholic, 5);
        assert_eq!(Sides::both(true), Sides::new(true, true));
    }
}
