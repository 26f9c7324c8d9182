// src/model.rs
//! Store model: leagues → schedules → scheduled games → box scores.
//!
//! Field names serialize in camelCase so the persisted document reads
//! `buildDate`, `leagueSchedules`, `visitorScore`, … .

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::sanitize::last_path_segment;

/// Root of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguesData {
    pub build_date: DateTime<Local>,
    pub league_schedules: Vec<LeagueSchedule>,
}

impl LeaguesData {
    pub fn new(league_schedules: Vec<LeagueSchedule>) -> Self {
        Self { build_date: Local::now(), league_schedules }
    }

    /// Every scheduled game across every league, in league then schedule order.
    pub fn games(&self) -> impl Iterator<Item = &ScheduledGame> {
        self.league_schedules.iter().flat_map(|l| l.scheduled_games.iter())
    }

    pub fn games_mut(&mut self) -> impl Iterator<Item = &mut ScheduledGame> {
        self.league_schedules.iter_mut().flat_map(|l| l.scheduled_games.iter_mut())
    }

    pub fn game_count(&self) -> usize {
        self.league_schedules.iter().map(|l| l.scheduled_games.len()).sum()
    }

    pub fn incomplete_count(&self) -> usize {
        self.games().filter(|g| !g.is_complete()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDescription {
    pub league_category: String,
    pub league_day: String,
    pub season: String,
    pub year: String,
    pub schedule_data_source: String,
}

impl LeagueDescription {
    /// "Monday Mens — Summer 2024"
    pub fn label(&self) -> String {
        format!(
            "{} {} — {} {}",
            title_case(&self.league_day),
            title_case(&self.league_category),
            title_case(&self.season),
            self.year
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSchedule {
    pub league_description: LeagueDescription,
    pub scheduled_games: Vec<ScheduledGame>,
}

/// Tagged view of a scheduled game's state.
///
/// The store keeps the score pair; `Canceled` is read back from the 0–0
/// sentinel, so a genuine scoreless game is indistinguishable from a
/// canceled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Scheduled,
    Recorded { visitor: u32, home: u32 },
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub date: NaiveDateTime,
    pub visiting_team_name: String,
    pub home_team_name: String,
    pub results_url: String,
    pub visitor_score: Option<u32>,
    pub home_score: Option<u32>,
    #[serde(default)]
    pub game_results: Game,
}

impl ScheduledGame {
    pub fn new(date: NaiveDateTime, visiting: String, home: String, results_url: String) -> Self {
        Self {
            date,
            visiting_team_name: visiting,
            home_team_name: home,
            results_url,
            visitor_score: None,
            home_score: None,
            game_results: Game::default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.visitor_score.is_some() && self.home_score.is_some()
    }

    pub fn was_cancelled(&self) -> bool {
        self.visitor_score == Some(0) && self.home_score == Some(0)
    }

    pub fn outcome(&self) -> GameOutcome {
        match (self.visitor_score, self.home_score) {
            (Some(0), Some(0)) => GameOutcome::Canceled,
            (Some(visitor), Some(home)) => GameOutcome::Recorded { visitor, home },
            _ => GameOutcome::Scheduled,
        }
    }

    /// Results-page id: last path segment of `results_url`.
    pub fn game_id(&self) -> &str {
        last_path_segment(&self.results_url)
    }

    /// Take scores and box score from a two-team result.
    /// Returns false (and leaves the game untouched) for any other team count.
    pub fn record(&mut self, game: Game) -> bool {
        if game.teams.len() != 2 {
            return false;
        }
        self.visitor_score = Some(game.teams[0].runs_scored);
        self.home_score = Some(game.teams[1].runs_scored);
        self.game_results = game;
        true
    }

    /// Merge a fetched result page. Two teams → recorded from the page; any
    /// other count → canceled, keeping the page details. True when recorded.
    pub fn settle(&mut self, result: Game) -> bool {
        if result.teams.len() == 2 {
            return self.record(result);
        }
        self.game_results.game_information = result.game_information;
        self.cancel();
        false
    }

    /// 0–0 sentinel with no team rows.
    pub fn cancel(&mut self) {
        self.visitor_score = Some(0);
        self.home_score = Some(0);
        self.game_results.teams.clear();
    }

    /// "2024-05-14 18:30 Visitors @ Home"
    pub fn label(&self) -> String {
        format!(
            "{} {} @ {}",
            self.date.format("%Y-%m-%d %H:%M"),
            self.visiting_team_name,
            self.home_team_name
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Set once on first population; `None` for a game never fetched.
    pub game_information: Option<GameInformation>,
    /// Index 0 = visiting team, index 1 = home team.
    pub teams: Vec<Team>,
}

impl Game {
    pub fn visitor(&self) -> Option<&Team> {
        self.teams.first()
    }

    pub fn home(&self) -> Option<&Team> {
        self.teams.get(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInformation {
    pub title: String,
    pub game_id: String,
    pub data_source: String,
    pub date: NaiveDateTime,
    pub league_category: String,
    pub league_day: String,
    pub season: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub home_team: bool,
    pub runs_scored: u32,
    pub runs_against: u32,
    pub hits: u32,
    pub outcome: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub at_bats: u32,
    pub runs: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub bases_on_balls: u32,
    pub sacrifice_flies: u32,
}

impl Player {
    pub fn hits(&self) -> u32 {
        self.singles + self.doubles + self.triples + self.home_runs
    }

    pub fn total_bases(&self) -> u32 {
        self.singles + 2 * self.doubles + 3 * self.triples + 4 * self.home_runs
    }
}

fn title_case(s: &str) -> String {
    s.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut cs = w.chars();
            match cs.next() {
                Some(first) => first.to_uppercase().chain(cs).collect::<String>(),
                None => s!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
