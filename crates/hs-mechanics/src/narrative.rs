//! Human-readable summaries of debate results.

use hs_core::Faction;

use crate::modifiers::PoolBreakdown;
use crate::resolution::Outcome;

/// Summarize an outcome in one paragraph.
pub fn summary(outcome: &Outcome, protestant: &str, catholic: &str) -> String {
    let Some(winner) = outcome.winner else {
        return format!("Stand-off (tie): {protestant} and {catholic} are equally matched.");
    };

    let (winning_name, losing_name) = match winner {
        Faction::Protestant => (protestant, catholic),
        Faction::Catholic => (catholic, protestant),
    };
    let loser = winner.opponent();

    let mut pieces = vec![format!(
        "{winning_name} ({winner}) wins the debate by {}!",
        outcome.margin
    )];
    if outcome.burned {
        let fate = match loser {
            Faction::Protestant => "is burned at the stake!",
            Faction::Catholic => "is disgraced!",
        };
        pieces.push(format!("{losing_name} ({loser}) {fate}"));
        if outcome.leading_figure_triggered {
            pieces.push(format!(
                "*** {losing_name} was a leading figure! Major consequences! ***"
            ));
        }
    } else {
        pieces.push(format!("No effect on {losing_name}."));
    }
    if outcome.flipped {
        pieces.push(format!(
            "{} space(s) converted to {winner}.",
            outcome.spaces_converted
        ));
    }
    pieces.join(" ")
}

/// One line per pool adjustment, e.g. `Catholic: Augsburg Confession -1`.
pub fn pool_lines(side: Faction, breakdown: &PoolBreakdown) -> Vec<String> {
    let mut lines: Vec<String> = breakdown
        .contributions
        .iter()
        .map(|c| format!("{side}: {} {:+}", c.source, c.dice))
        .collect();
    if breakdown.was_clamped() {
        if breakdown.raw_total() < i64::from(breakdown.size) {
            lines.push(format!("{side}: raised to the minimum of {} die", breakdown.size));
        } else {
            lines.push(format!("{side}: capped at the maximum of {} dice", breakdown.size));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::modifiers::{EventCard, EventEffect, PoolCalculator, PoolModifiers, Stance};
    use crate::resolution::{Contestant, resolve};
    use crate::rules::DebatePolicy;

    fn outcome(faces: &[u32], protestant: Contestant, catholic: Contestant) -> Outcome {
        let mut dice = ScriptedDice::new(faces.iter().copied());
        resolve(&protestant, &catholic, &DebatePolicy::default(), &mut dice)
    }

    #[test]
    fn tie_summary() {
        let o = outcome(&[5, 6], Contestant::new(1, 1), Contestant::new(1, 1));
        assert_eq!(
            summary(&o, "Luther", "Eck"),
            "Stand-off (tie): Luther and Eck are equally matched."
        );
    }

    #[test]
    fn narrow_win_summary() {
        let o = outcome(&[5, 1], Contestant::new(1, 1), Contestant::new(1, 1));
        assert_eq!(
            summary(&o, "Luther", "Eck"),
            "Luther (Protestant) wins the debate by 1! No effect on Eck."
        );
    }

    #[test]
    fn catholic_loser_is_disgraced() {
        let o = outcome(&[5, 6, 1, 2], Contestant::new(2, 4), Contestant::new(2, 3));
        let s = summary(&o, "Luther", "Eck");
        assert!(s.contains("Eck (Catholic) is disgraced!"));
        assert!(s.contains("2 space(s) converted to Protestant."));
    }

    #[test]
    fn protestant_leading_figure_burned() {
        let o = outcome(
            &[1, 1, 6, 6],
            Contestant::new(2, 4).leading_figure(),
            Contestant::new(2, 3),
        );
        let s = summary(&o, "Luther", "Eck");
        assert!(s.starts_with("Eck (Catholic) wins the debate by 2!"));
        assert!(s.contains("Luther (Protestant) is burned at the stake!"));
        assert!(s.contains("*** Luther was a leading figure! Major consequences! ***"));
    }

    #[test]
    fn pool_lines_render_signs() {
        let mods = PoolModifiers::new()
            .with_stance(Stance::Defending { committed: true })
            .with_event(EventCard::AugsburgConfession, EventEffect::Dice(-1));
        let breakdown = PoolCalculator::default().compute(2, &mods);
        assert_eq!(
            pool_lines(Faction::Catholic, &breakdown),
            vec![
                "Catholic: defending (committed) +1".to_string(),
                "Catholic: Augsburg Confession -1".to_string(),
            ]
        );
    }

    #[test]
    fn pool_lines_mention_floor() {
        let mods = PoolModifiers::new().with_modifier(-4);
        let breakdown = PoolCalculator::default().compute(1, &mods);
        let lines = pool_lines(Faction::Protestant, &breakdown);
        assert_eq!(lines.last().unwrap(), "Protestant: raised to the minimum of 1 die");
    }

    #[test]
    fn pool_lines_mention_ceiling() {
        let mods = PoolModifiers::new().with_bonus_dice(100);
        let breakdown = PoolCalculator::default().compute(4, &mods);
        let lines = pool_lines(Faction::Catholic, &breakdown);
        assert_eq!(lines.last().unwrap(), "Catholic: capped at the maximum of 40 dice");
    }
}
