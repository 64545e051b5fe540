// tests/api_tests.rs

mod common;

use common::{spawn_app, spawn_app_with, unique_name};
use learning_style_api::models::{category::Category::*, question::SeedQuestion};
use serde_json::{Value, json};

/// Registers and logs in a fresh user, returning the bearer token.
async fn register_and_login(client: &reqwest::Client, address: &str) -> String {
    let username = unique_name("u");
    let password = "password123";

    let register = client
        .post(format!("{}/register", address))
        .json(&json!({
            "email": format!("{}@example.com", username),
            "username": username,
            "password": password
        }))
        .send()
        .await
        .expect("Register failed");
    assert_eq!(register.status().as_u16(), 201);

    let login: Value = client
        .post(format!("{}/login", address))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Login failed")
        .json()
        .await
        .expect("Failed to parse login json");

    assert_eq!(login["token_type"], "bearer");
    login["access_token"]
        .as_str()
        .expect("Token not found")
        .to_string()
}

async fn submit(
    client: &reqwest::Client,
    address: &str,
    token: &str,
    answers: Value,
) -> reqwest::Response {
    client
        .post(format!("{}/responses", address))
        .bearer_auth(token)
        .json(&answers)
        .send()
        .await
        .expect("Submit failed")
}

async fn my_result(client: &reqwest::Client, address: &str, token: &str) -> reqwest::Response {
    client
        .get(format!("{}/my-result", address))
        .bearer_auth(token)
        .send()
        .await
        .expect("Fetch result failed")
}

#[tokio::test]
async fn unknown_path_is_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn register_returns_user_without_password() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let username = unique_name("u");

    let response = client
        .post(format!("{}/register", address))
        .json(&json!({
            "email": format!("{}@example.com", username),
            "username": username,
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], username.as_str());
    assert_eq!(body["is_admin"], false);
    assert!(body.get("hashed_password").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn register_fails_validation() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Username too short
    let short_name = client
        .post(format!("{}/register", address))
        .json(&json!({
            "email": "yo@example.com",
            "username": "yo",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(short_name.status().as_u16(), 400);

    // Not an email address
    let bad_email = client
        .post(format!("{}/register", address))
        .json(&json!({
            "email": "not-an-email",
            "username": "valid_name",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(bad_email.status().as_u16(), 400);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let username = unique_name("u");
    let body = json!({
        "email": format!("{}@example.com", username),
        "username": username,
        "password": "password123"
    });

    let first = client
        .post(format!("{}/register", address))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(first.status().as_u16(), 201);

    let second = client
        .post(format!("{}/register", address))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status().as_u16(), 409);
    let error: Value = second.json().await.unwrap();
    assert_eq!(error["error"], "Username already registered");
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    register_and_login(&client, &address).await;

    let response = client
        .post(format!("{}/login", address))
        .json(&json!({ "username": "nobody_here", "password": "password123" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Incorrect username or password");
}

#[tokio::test]
async fn questions_are_public_and_ordered() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let questions: Vec<Value> = client
        .get(format!("{}/questions", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(questions.len(), 80);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["category"], "theorist");
    assert_eq!(questions[79]["id"], 80);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let no_token = client
        .post(format!("{}/responses", address))
        .json(&json!([]))
        .send()
        .await
        .unwrap();
    assert_eq!(no_token.status().as_u16(), 401);

    let bad_token = my_result(&client, &address, "not.a.token").await;
    assert_eq!(bad_token.status().as_u16(), 401);
}

#[tokio::test]
async fn me_returns_the_current_user() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &address).await;

    let me: Value = client
        .get(format!("{}/me", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(me["is_admin"], false);
    assert!(me["username"].as_str().unwrap().starts_with("u_"));
}

#[tokio::test]
async fn result_is_missing_before_first_submission() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &address).await;

    let response = my_result(&client, &address, &token).await;

    assert_eq!(response.status().as_u16(), 404);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "No learning style result found");
}

#[tokio::test]
async fn submission_scores_learning_style() {
    let questions = [
        SeedQuestion { text: "Q1", category: Activist },
        SeedQuestion { text: "Q2", category: Reflector },
        SeedQuestion { text: "Q3", category: Activist },
    ];
    let address = spawn_app_with(&questions).await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &address).await;

    let response = submit(
        &client,
        &address,
        &token,
        json!([
            { "question_id": 1, "answer": 1 },
            { "question_id": 2, "answer": 0 },
            { "question_id": 3, "answer": 1 }
        ]),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);
    let stored: Vec<Value> = response.json().await.unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0]["question_id"], 1);

    let result: Value = my_result(&client, &address, &token).await.json().await.unwrap();
    assert_eq!(result["visual_score"], 2);
    assert_eq!(result["auditory_score"], 0);
    assert_eq!(result["reading_score"], 0);
    assert_eq!(result["kinesthetic_score"], 0);
    assert_eq!(result["dominant_style"], "activist");
}

#[tokio::test]
async fn resubmission_overwrites_previous_result() {
    let questions = [
        SeedQuestion { text: "Q1", category: Activist },
        SeedQuestion { text: "Q2", category: Reflector },
    ];
    let address = spawn_app_with(&questions).await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &address).await;

    submit(
        &client,
        &address,
        &token,
        json!([{ "question_id": 1, "answer": 1 }, { "question_id": 2, "answer": 0 }]),
    )
    .await;
    let first: Value = my_result(&client, &address, &token).await.json().await.unwrap();

    submit(
        &client,
        &address,
        &token,
        json!([{ "question_id": 2, "answer": 1 }]),
    )
    .await;
    let second: Value = my_result(&client, &address, &token).await.json().await.unwrap();

    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["visual_score"], 0);
    assert_eq!(second["auditory_score"], 1);
    assert_eq!(second["dominant_style"], "reflector");
}

#[tokio::test]
async fn ties_and_unknown_questions() {
    let questions = [
        SeedQuestion { text: "Q1", category: Activist },
        SeedQuestion { text: "Q2", category: Reflector },
    ];
    let address = spawn_app_with(&questions).await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &address).await;

    let response = submit(
        &client,
        &address,
        &token,
        json!([
            { "question_id": 99, "answer": 5 },
            { "question_id": 1, "answer": 1 },
            { "question_id": 2, "answer": 1 }
        ]),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    let result: Value = my_result(&client, &address, &token).await.json().await.unwrap();
    assert_eq!(result["visual_score"], 1);
    assert_eq!(result["auditory_score"], 1);
    assert_eq!(result["dominant_style"], "activist");
}

#[tokio::test]
async fn empty_submission_yields_degenerate_result() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &address).await;

    let response = submit(&client, &address, &token, json!([])).await;
    assert_eq!(response.status().as_u16(), 200);

    let result: Value = my_result(&client, &address, &token).await.json().await.unwrap();
    for field in ["visual_score", "auditory_score", "reading_score", "kinesthetic_score"] {
        assert_eq!(result[field], 0, "{field}");
    }
    assert_eq!(result["dominant_style"], "activist");
}
