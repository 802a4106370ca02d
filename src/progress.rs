use crate::ledger::{display_streak, XP_PER_COMPLETION};
use crate::models::{DailyProgressEntry, Habit, ProgressResponse, ProgressSummary};
use chrono::{Duration, Local, NaiveDate};

pub fn build_progress(habits: &[Habit]) -> ProgressResponse {
    build_progress_at(Local::now().date_naive(), habits)
}

pub fn build_progress_at(today: NaiveDate, habits: &[Habit]) -> ProgressResponse {
    let total = habits.len();
    let mut days = Vec::with_capacity(7);
    let mut ratio_sum = 0.0f64;

    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = date_key(date);
        let completed = habits
            .iter()
            .flat_map(|habit| habit.history.iter())
            .filter(|entry| entry.date == key && entry.completed)
            .count();

        if total > 0 {
            ratio_sum += completed as f64 / total as f64;
        }

        days.push(DailyProgressEntry {
            date: key,
            day: date.format("%a").to_string(),
            completed_count: completed,
            total_habits: total,
            xp_for_day: completed as u64 * XP_PER_COMPLETION,
        });
    }

    let today_key = date_key(today);
    let summary = ProgressSummary {
        completed_today: days.last().map(|day| day.completed_count).unwrap_or(0),
        total_habits: total,
        average_completion_pct: (ratio_sum * 100.0 / 7.0).round() as u32,
        longest_streak: habits
            .iter()
            .map(|habit| display_streak(habit, &today_key))
            .max()
            .unwrap_or(0),
    };

    ProgressResponse { days, summary }
}

pub fn level_for(xp: u64) -> u64 {
    xp / 100
}

pub fn level_progress(xp: u64) -> u64 {
    xp % 100
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, HistoryEntry};

    fn habit(streak: u32, history: Vec<(&str, bool)>) -> Habit {
        Habit {
            id: "h".to_string(),
            name: "Read".to_string(),
            category: Category::Health,
            streak,
            completed: false,
            history: history
                .into_iter()
                .map(|(date, completed)| HistoryEntry {
                    date: date.to_string(),
                    completed,
                })
                .collect(),
        }
    }

    #[test]
    fn progress_window_covers_seven_days_in_order() {
        let today = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        let progress = build_progress_at(today, &[]);

        assert_eq!(progress.days.len(), 7);
        assert_eq!(progress.days[0].date, "2023-01-02");
        assert_eq!(progress.days[6].date, "2023-01-08");
        assert!(progress
            .days
            .windows(2)
            .all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn progress_counts_completed_entries_per_day() {
        let habits = vec![
            habit(1, vec![("2023-01-07", true), ("2023-01-08", true)]),
            habit(0, vec![("2023-01-07", false)]),
        ];
        let today = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        let progress = build_progress_at(today, &habits);

        let yesterday = &progress.days[5];
        assert_eq!(yesterday.date, "2023-01-07");
        assert_eq!(yesterday.completed_count, 1);
        assert_eq!(yesterday.total_habits, 2);
        assert_eq!(yesterday.xp_for_day, 10);

        let last = &progress.days[6];
        assert_eq!(last.completed_count, 1);
        assert_eq!(progress.summary.completed_today, 1);
    }

    #[test]
    fn progress_with_no_habits_has_zero_average() {
        let today = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        let progress = build_progress_at(today, &[]);

        assert_eq!(progress.summary.average_completion_pct, 0);
        assert_eq!(progress.summary.total_habits, 0);
        assert_eq!(progress.summary.longest_streak, 0);
        assert!(progress.days.iter().all(|day| day.xp_for_day == 0));
    }

    #[test]
    fn progress_average_rounds_daily_ratios() {
        let habits = vec![habit(1, vec![("2023-01-08", true)])];
        let today = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        let progress = build_progress_at(today, &habits);

        // one fully completed day out of seven: 100 / 7 rounds to 14
        assert_eq!(progress.summary.average_completion_pct, 14);
    }

    #[test]
    fn longest_streak_applies_reset_on_miss() {
        let habits = vec![habit(3, vec![("2023-01-01", false)])];
        let today = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let progress = build_progress_at(today, &habits);

        assert_eq!(progress.summary.longest_streak, 0);
    }

    #[test]
    fn longest_streak_takes_maximum_across_habits() {
        let habits = vec![
            habit(2, vec![("2023-01-01", true)]),
            habit(5, vec![("2023-01-01", true)]),
        ];
        let today = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let progress = build_progress_at(today, &habits);

        assert_eq!(progress.summary.longest_streak, 5);
    }

    #[test]
    fn level_math_follows_hundred_point_bands() {
        assert_eq!(level_for(0), 0);
        assert_eq!(level_progress(0), 0);
        assert_eq!(level_for(230), 2);
        assert_eq!(level_progress(230), 30);
        assert_eq!(level_for(100), 1);
        assert_eq!(level_progress(100), 0);
    }
}
