use hs_core::Faction;
use hs_mechanics::narrative::summary;
use hs_mechanics::{
    Contestant, PoolCalculator, PoolModifiers, RandomDice, Sides, Stance, resolve,
};
use serde_json::json;

use super::PolicySource;

const NAMES: Sides<&str> = Sides {
    protestant: "Protestant debater",
    catholic: "Catholic debater",
};

pub fn run(
    ratings: (u32, u32),
    attacker: Option<Faction>,
    defender_committed: bool,
    policy: &PolicySource,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let policy = policy.load()?;
    let ratings = Sides::new(ratings.0, ratings.1);

    let stance = |side: Faction| match attacker {
        None => Stance::Neutral,
        Some(a) if a == side => Stance::Attacking,
        Some(_) => Stance::Defending {
            committed: defender_committed,
        },
    };
    let calc = PoolCalculator::new(policy.stance);
    let pools = Sides::new(
        calc.compute(
            ratings.protestant,
            &PoolModifiers::new().with_stance(stance(Faction::Protestant)),
        ),
        calc.compute(
            ratings.catholic,
            &PoolModifiers::new().with_stance(stance(Faction::Catholic)),
        ),
    );

    let mut dice = match seed {
        Some(seed) => RandomDice::seeded(seed),
        None => RandomDice::new(),
    };
    let outcome = resolve(
        &Contestant::new(pools.protestant.size, ratings.protestant),
        &Contestant::new(pools.catholic.size, ratings.catholic),
        &policy,
        &mut dice,
    );
    let text = summary(&outcome, NAMES.protestant, NAMES.catholic);

    if json {
        let value = json!({
            "policy": policy.name,
            "protestant_pool": pools.protestant,
            "catholic_pool": pools.catholic,
            "outcome": outcome,
            "summary": text,
        });
        let rendered = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    super::print_outcome(
        NAMES,
        Sides::new(&pools.protestant, &pools.catholic),
        &outcome,
        &text,
    );
    Ok(())
}
