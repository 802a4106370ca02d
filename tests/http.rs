use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct SessionResponse {
    username: String,
    xp: u64,
    level: u64,
    level_progress: u64,
}

#[derive(Debug, Deserialize)]
struct HabitView {
    id: String,
    name: String,
    category: String,
    streak: u32,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct LedgerResponse {
    habits: Vec<HabitView>,
    xp: u64,
    level: u64,
    #[allow(dead_code)]
    level_progress: u64,
}

#[derive(Debug, Deserialize)]
struct DailyProgressEntry {
    date: String,
    #[allow(dead_code)]
    day: String,
    completed_count: usize,
    total_habits: usize,
    xp_for_day: u64,
}

#[derive(Debug, Deserialize)]
struct ProgressSummary {
    completed_today: usize,
    total_habits: usize,
    average_completion_pct: u32,
    longest_streak: u32,
}

#[derive(Debug, Deserialize)]
struct ProgressResponse {
    days: Vec<DailyProgressEntry>,
    summary: ProgressSummary,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

fn unique_data_dir() -> String {
    let mut path = std::env::temp_dir();
    path.push(format!("habit_http_{}_{}", std::process::id(), unique_suffix()));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(base_url.to_string()).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("HABITS_DATA_DIR", data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn register_user(client: &Client, base_url: &str, username: &str) -> SessionResponse {
    let response = client
        .post(format!("{base_url}/api/register"))
        .json(&serde_json::json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_register_and_login_flow() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = format!("alice{}", unique_suffix());

    let session = register_user(&client, &server.base_url, &username).await;
    assert_eq!(session.username, username);
    assert_eq!(session.xp, 0);
    assert_eq!(session.level, 0);
    assert_eq!(session.level_progress, 0);

    let duplicate = client
        .post(format!("{}/api/register", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "other" }))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let wrong = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let login = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .unwrap();
    assert!(login.status().is_success());
    let session: SessionResponse = login.json().await.unwrap();
    assert_eq!(session.username, username);
}

#[tokio::test]
async fn http_habit_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = format!("bob{}", unique_suffix());
    register_user(&client, &server.base_url, &username).await;

    let ledger: LedgerResponse = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({ "name": "Read", "category": "health" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ledger.habits.len(), 1);
    assert_eq!(ledger.habits[0].name, "Read");
    assert_eq!(ledger.habits[0].category, "health");
    assert_eq!(ledger.habits[0].streak, 0);
    assert!(!ledger.habits[0].completed);
    assert_eq!(ledger.xp, 0);
    let id = ledger.habits[0].id.clone();

    let ledger: LedgerResponse = client
        .post(format!("{}/api/habits/{id}/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ledger.habits[0].streak, 1);
    assert!(ledger.habits[0].completed);
    assert_eq!(ledger.xp, 10);
    assert_eq!(ledger.level, 0);

    let ledger: LedgerResponse = client
        .post(format!("{}/api/habits/{id}/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ledger.habits[0].streak, 0);
    assert!(!ledger.habits[0].completed);
    assert_eq!(ledger.xp, 0);

    let ledger: LedgerResponse = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({ "name": "   ", "category": "health" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ledger.habits.len(), 1);

    let ledger: LedgerResponse = client
        .delete(format!("{}/api/habits/not-a-real-id", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ledger.habits.len(), 1);

    let ledger: LedgerResponse = client
        .delete(format!("{}/api/habits/{id}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(ledger.habits.is_empty());
}

#[tokio::test]
async fn http_progress_reports_seven_days() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let username = format!("carol{}", unique_suffix());
    register_user(&client, &server.base_url, &username).await;

    let ledger: LedgerResponse = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({ "name": "Meditate", "category": "mindfulness" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = ledger.habits[0].id.clone();

    client
        .post(format!("{}/api/habits/{id}/toggle", server.base_url))
        .send()
        .await
        .unwrap();

    let progress: ProgressResponse = client
        .get(format!("{}/api/progress", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(progress.days.len(), 7);
    assert!(progress
        .days
        .windows(2)
        .all(|pair| pair[0].date < pair[1].date));

    let today = progress.days.last().unwrap();
    assert_eq!(today.completed_count, 1);
    assert_eq!(today.total_habits, 1);
    assert_eq!(today.xp_for_day, 10);

    assert_eq!(progress.summary.completed_today, 1);
    assert_eq!(progress.summary.total_habits, 1);
    assert_eq!(progress.summary.longest_streak, 1);
    assert!(progress.summary.average_completion_pct >= 14);
}

#[tokio::test]
async fn http_ledger_requires_login() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let logout = client
        .post(format!("{}/api/logout", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(logout.status(), StatusCode::NO_CONTENT);

    let habits = client
        .get(format!("{}/api/habits", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(habits.status(), StatusCode::UNAUTHORIZED);

    let session = client
        .get(format!("{}/api/session", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(session.status(), StatusCode::UNAUTHORIZED);
}
