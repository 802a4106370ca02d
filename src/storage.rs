use crate::models::{Habit, Store, UserRecord};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";

pub fn habits_key(username: &str) -> String {
    format!("habits_{username}")
}

pub fn xp_key(username: &str) -> String {
    format!("xp_{username}")
}

pub fn resolve_data_dir() -> PathBuf {
    env::var("HABITS_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

pub async fn read_key<T: DeserializeOwned>(dir: &Path, key: &str, fallback: T) -> T {
    match fs::read(key_path(dir, key)).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse stored value for {key}: {err}");
                fallback
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => fallback,
        Err(err) => {
            error!("failed to read stored value for {key}: {err}");
            fallback
        }
    }
}

pub async fn write_key<T: Serialize>(dir: &Path, key: &str, value: &T) {
    let payload = match serde_json::to_vec_pretty(value) {
        Ok(payload) => payload,
        Err(err) => {
            error!("failed to serialize value for {key}: {err}");
            return;
        }
    };
    if let Err(err) = fs::write(key_path(dir, key), payload).await {
        error!("failed to persist {key}: {err}");
    }
}

pub async fn load_store(dir: &Path) -> Store {
    let users: BTreeMap<String, UserRecord> = read_key(dir, USERS_KEY, BTreeMap::new()).await;

    let mut habits = BTreeMap::new();
    let mut xp = BTreeMap::new();
    for username in users.keys() {
        habits.insert(
            username.clone(),
            read_key::<Vec<Habit>>(dir, &habits_key(username), Vec::new()).await,
        );
        xp.insert(
            username.clone(),
            read_key::<u64>(dir, &xp_key(username), 0).await,
        );
    }

    let current_user = read_key::<Option<String>>(dir, CURRENT_USER_KEY, None)
        .await
        .filter(|name| users.contains_key(name));

    Store {
        users,
        habits,
        xp,
        current_user,
    }
}
