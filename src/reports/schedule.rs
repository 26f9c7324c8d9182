// src/reports/schedule.rs
use crate::model::{GameOutcome, LeaguesData};

use super::{DataSet, headers, selected};

/// Date, Visitor, V, H, Home, Status, Game id. Schedule order per league.
pub fn build(data: &LeaguesData, selection: &[usize]) -> DataSet {
    let rows = selected(data, selection)
        .into_iter()
        .flat_map(|league| league.scheduled_games.iter())
        .map(|game| {
            let (v, h, status) = match game.outcome() {
                GameOutcome::Scheduled => (s!(), s!(), "Scheduled"),
                GameOutcome::Recorded { visitor, home } => (visitor.to_string(), home.to_string(), "Final"),
                GameOutcome::Canceled => (s!("0"), s!("0"), "Canceled"),
            };
            vec![
                game.date.format("%Y-%m-%d %H:%M").to_string(),
                game.visiting_team_name.clone(),
                v,
                h,
                game.home_team_name.clone(),
                s!(status),
                s!(game.game_id()),
            ]
        })
        .collect();

    DataSet { headers: headers(&["Date", "Visitor", "V", "H", "Home", "Status", "Game id"]), rows }
}
