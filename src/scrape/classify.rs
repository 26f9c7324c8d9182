// src/scrape/classify.rs
//! Has a game's result probably been posted yet?
//!
//! Results go up by `check_hours` o'clock on game day whatever the start time,
//! so only the hour of the scheduled date is moved. A miss is not fatal: the
//! game stays incomplete and is looked at again on the next update.
use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

use crate::config::consts::CHECK_HOURS;
use crate::model::ScheduledGame;

/// Against the local clock.
pub fn is_recorded(game: &ScheduledGame, check_hours: Option<u32>) -> bool {
    is_recorded_at(game, check_hours, Local::now().naive_local())
}

pub fn is_recorded_at(game: &ScheduledGame, check_hours: Option<u32>, now: NaiveDateTime) -> bool {
    now >= recorded_time(game.date, check_hours.unwrap_or(CHECK_HOURS))
}

/// `date` with its hour replaced by `check_hours` (minutes and seconds kept).
pub fn recorded_time(date: NaiveDateTime, check_hours: u32) -> NaiveDateTime {
    let shift = i64::from(check_hours) - i64::from(date.hour());
    date + TimeDelta::hours(shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 13).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn game_at(h: u32) -> ScheduledGame {
        ScheduledGame::new(at(h, 0), s!("A"), s!("B"), s!("https://x.org/event/1/"))
    }

    #[test]
    fn boundary_at_sixteen_hundred() {
        let g = game_at(10);
        assert!(!is_recorded_at(&g, None, at(15, 59)));
        assert!(is_recorded_at(&g, None, at(16, 0)));
        assert!(is_recorded_at(&g, Some(16), at(16, 1)));
    }

    #[test]
    fn evening_game_moves_back_to_check_hour() {
        // A 19:00 start is still "recorded" from 16:00 the same day.
        let g = game_at(19);
        assert!(is_recorded_at(&g, None, at(17, 0)));
        assert!(!is_recorded_at(&g, None, at(15, 0)));
    }

    #[test]
    fn override_check_hours() {
        let g = game_at(10);
        assert!(!is_recorded_at(&g, Some(22), at(21, 0)));
        assert!(is_recorded_at(&g, Some(22), at(22, 0)));
    }

    #[test]
    fn against_the_clock() {
        let past = ScheduledGame::new(at(18, 30), s!("A"), s!("B"), s!("https://x.org/event/1/"));
        assert!(is_recorded(&past, None));

        let date = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        let future = ScheduledGame::new(date, s!("A"), s!("B"), s!("https://x.org/event/2/"));
        assert!(!is_recorded(&future, Some(0)));
    }

    #[test]
    fn minutes_are_kept() {
        let date = at(18, 30);
        assert_eq!(recorded_time(date, 16), at(16, 30));
    }
}
