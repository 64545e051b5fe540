// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use learning_style_api::{
    config::Config,
    models::question::SeedQuestion,
    routes,
    seed::{QUESTION_BANK, seed_admin_user},
    state::AppState,
    store::{MemoryStore, SharedStore, Store},
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-password";

pub fn test_config() -> Config {
    Config {
        database_url: None,
        jwt_secret: "test_secret_for_integration_tests".to_string(),
        jwt_expiration: 600, // 10 minutes for tests
        rust_log: "error".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        admin_username: Some(ADMIN_USERNAME.to_string()),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        admin_email: "admin@example.com".to_string(),
    }
}

/// In-memory state seeded with `questions` and the admin account.
pub async fn test_state(questions: &[SeedQuestion]) -> AppState {
    let config = test_config();
    let store = MemoryStore::new();
    store
        .seed_questions(questions)
        .await
        .expect("Failed to seed questions");
    seed_admin_user(&store, &config)
        .await
        .expect("Failed to seed admin");

    let store: SharedStore = Arc::new(store);
    AppState { store, config }
}

/// Spawns the app on a random port.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app_with(questions: &[SeedQuestion]) -> String {
    let app = routes::create_router(test_state(questions).await);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

pub async fn spawn_app() -> String {
    spawn_app_with(&QUESTION_BANK).await
}

pub fn unique_name(prefix: &str) -> String {
    format!("{}_{}", prefix, &uuid::Uuid::new_v4().to_string()[..8])
}
