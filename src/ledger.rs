use crate::models::{Category, Habit, HistoryEntry};
use uuid::Uuid;

pub const XP_PER_COMPLETION: u64 = 10;

pub fn add_habit<'a>(habits: &'a mut Vec<Habit>, name: &str, category: Category) -> Option<&'a Habit> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    habits.push(Habit {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        category,
        streak: 0,
        completed: false,
        history: Vec::new(),
    });
    habits.last()
}

pub fn delete_habit(habits: &mut Vec<Habit>, id: &str) {
    habits.retain(|habit| habit.id != id);
}

pub fn toggle_completion(habits: &mut [Habit], xp: u64, id: &str, today: &str) -> u64 {
    let Some(habit) = habits.iter_mut().find(|habit| habit.id == id) else {
        return xp;
    };

    let now_completed = !habit.completed;
    habit.completed = now_completed;
    habit.streak = if now_completed {
        habit.streak + 1
    } else {
        habit.streak.saturating_sub(1)
    };

    match habit
        .history
        .iter_mut()
        .find(|entry| entry.date == today)
    {
        Some(entry) => entry.completed = now_completed,
        None => habit.history.push(HistoryEntry {
            date: today.to_string(),
            completed: now_completed,
        }),
    }

    if now_completed {
        xp.saturating_add(XP_PER_COMPLETION)
    } else {
        xp.saturating_sub(XP_PER_COMPLETION)
    }
}

// History dates are ISO "%Y-%m-%d" strings, so lexicographic order is calendar order.
pub fn display_streak(habit: &Habit, today: &str) -> u32 {
    let last_before_today = habit
        .history
        .iter()
        .filter(|entry| entry.date.as_str() < today)
        .max_by(|a, b| a.date.cmp(&b.date));

    match last_before_today {
        Some(entry) if !entry.completed => 0,
        _ => habit.streak,
    }
}
