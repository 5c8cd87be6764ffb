use comfy_table::{ContentArrangement, Table};

use hs_mechanics::rules::preset;
use hs_mechanics::{BurnRule, DebatePolicy};

fn burn_text(policy: &DebatePolicy) -> String {
    let mut text = match policy.burn_rule {
        BurnRule::Threshold => format!("margin >= {}", policy.burn_threshold),
        BurnRule::ExceedsLoserRating => "margin > loser rating".to_string(),
    };
    if policy.zero_hits_auto_burn {
        text.push_str(", or no hits");
    }
    text
}

pub fn run(name: Option<&str>) -> Result<(), String> {
    if let Some(name) = name {
        let policy = preset::by_name(name).map_err(|e| e.to_string())?;
        println!("{}", policy.to_json().map_err(|e| e.to_string())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Preset", "Attacker", "Defender", "Burn", "Flip", "Attacker required"]);
    for &name in preset::names() {
        let policy = preset::by_name(name).map_err(|e| e.to_string())?;
        let stance = policy.stance;
        table.add_row(vec![
            name.to_string(),
            format!("{:+}", stance.attacker),
            format!(
                "{:+} ({:+} committed)",
                stance.defender_fresh, stance.defender_committed
            ),
            burn_text(&policy),
            format!("margin >= {}", policy.flip_threshold),
            if policy.require_attacker { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
