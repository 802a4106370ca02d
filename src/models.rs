use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Learning,
    Productivity,
    Mindfulness,
    Fitness,
    Social,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub streak: u32,
    pub completed: bool,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: BTreeMap<String, UserRecord>,
    pub habits: BTreeMap<String, Vec<Habit>>,
    pub xp: BTreeMap<String, u64>,
    pub current_user: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct NewHabitRequest {
    pub name: String,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: String,
    pub xp: u64,
    pub level: u64,
    pub level_progress: u64,
}

#[derive(Debug, Serialize)]
pub struct HabitView {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub streak: u32,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub habits: Vec<HabitView>,
    pub xp: u64,
    pub level: u64,
    pub level_progress: u64,
}

#[derive(Debug, Serialize)]
pub struct DailyProgressEntry {
    pub date: String,
    pub day: String,
    pub completed_count: usize,
    pub total_habits: usize,
    pub xp_for_day: u64,
}

#[derive(Debug, Serialize)]
pub struct ProgressSummary {
    pub completed_today: usize,
    pub total_habits: usize,
    pub average_completion_pct: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub days: Vec<DailyProgressEntry>,
    pub summary: ProgressSummary,
}
