// src/reports/batting.rs
use std::collections::BTreeMap;

use crate::model::{LeaguesData, Player};

use super::{DataSet, headers, selected};

#[derive(Default)]
struct Line {
    games: u32,
    totals: Player,
}

/// Player, Team, G, AB, R, H, 1B, 2B, 3B, HR, BB, SF, AVG, summed over every
/// stored box score. Sorted by team, then player.
pub fn build(data: &LeaguesData, selection: &[usize]) -> DataSet {
    let mut lines: BTreeMap<(String, String), Line> = BTreeMap::new();

    let teams = selected(data, selection)
        .into_iter()
        .flat_map(|l| l.scheduled_games.iter())
        .flat_map(|g| g.game_results.teams.iter());

    for team in teams {
        for p in &team.players {
            let line = lines.entry((team.name.clone(), p.name.clone())).or_default();
            line.games += 1;
            let t = &mut line.totals;
            t.at_bats += p.at_bats;
            t.runs += p.runs;
            t.singles += p.singles;
            t.doubles += p.doubles;
            t.triples += p.triples;
            t.home_runs += p.home_runs;
            t.bases_on_balls += p.bases_on_balls;
            t.sacrifice_flies += p.sacrifice_flies;
        }
    }

    let rows = lines
        .into_iter()
        .map(|((team, player), line)| {
            let t = &line.totals;
            vec![
                player,
                team,
                line.games.to_string(),
                t.at_bats.to_string(),
                t.runs.to_string(),
                t.hits().to_string(),
                t.singles.to_string(),
                t.doubles.to_string(),
                t.triples.to_string(),
                t.home_runs.to_string(),
                t.bases_on_balls.to_string(),
                t.sacrifice_flies.to_string(),
                average(t.hits(), t.at_bats),
            ]
        })
        .collect();

    DataSet {
        headers: headers(&["Player", "Team", "G", "AB", "R", "H", "1B", "2B", "3B", "HR", "BB", "SF", "AVG"]),
        rows,
    }
}

/// Baseball style: `.333`, `1.000`, blank with no at-bats.
fn average(hits: u32, at_bats: u32) -> String {
    if at_bats == 0 {
        return s!();
    }
    let avg = format!("{:.3}", f64::from(hits) / f64::from(at_bats));
    match avg.strip_prefix('0') {
        Some(rest) => s!(rest),
        None => avg,
    }
}
