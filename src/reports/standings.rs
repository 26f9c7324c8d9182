// src/reports/standings.rs
use std::collections::HashMap;

use crate::model::{GameOutcome, LeaguesData};

use super::{DataSet, headers, selected};

#[derive(Default)]
struct Record {
    gp: u32,
    w: u32,
    l: u32,
    t: u32,
    rs: u32,
    ra: u32,
}

impl Record {
    fn diff(&self) -> i64 {
        i64::from(self.rs) - i64::from(self.ra)
    }

    fn add(&mut self, scored: u32, allowed: u32) {
        self.gp += 1;
        self.rs += scored;
        self.ra += allowed;
        match scored.cmp(&allowed) {
            std::cmp::Ordering::Greater => self.w += 1,
            std::cmp::Ordering::Less => self.l += 1,
            std::cmp::Ordering::Equal => self.t += 1,
        }
    }
}

/// Team, GP, W, L, T, RS, RA, Diff. Canceled games do not count.
/// Ordered by wins, then run differential, then name.
pub fn build(data: &LeaguesData, selection: &[usize]) -> DataSet {
    let mut table: HashMap<&str, Record> = HashMap::new();

    for game in selected(data, selection).into_iter().flat_map(|l| l.scheduled_games.iter()) {
        let GameOutcome::Recorded { visitor, home } = game.outcome() else { continue };
        table.entry(game.visiting_team_name.as_str()).or_default().add(visitor, home);
        table.entry(game.home_team_name.as_str()).or_default().add(home, visitor);
    }

    let mut teams: Vec<(&str, Record)> = table.into_iter().collect();
    teams.sort_by(|(an, a), (bn, b)| {
        b.w.cmp(&a.w).then(b.diff().cmp(&a.diff())).then(an.cmp(bn))
    });

    let rows = teams
        .into_iter()
        .map(|(name, r)| {
            vec![
                s!(name),
                r.gp.to_string(),
                r.w.to_string(),
                r.l.to_string(),
                r.t.to_string(),
                r.rs.to_string(),
                r.ra.to_string(),
                format!("{:+}", r.diff()),
            ]
        })
        .collect();

    DataSet { headers: headers(&["Team", "GP", "W", "L", "T", "RS", "RA", "Diff"]), rows }
}
