mod common;

use common::TestApp;
use reqwest::Client;

// `ENVIRONMENT` mutation is process-wide, so the default and the override
// are checked sequentially inside one test body (this file is its own test
// binary, so no other test races with it).
#[tokio::test]
async fn environment_defaults_then_echoes_override() {
    std::env::remove_var("ENVIRONMENT");

    let app = TestApp::spawn().await;
    let client = Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(body["environment"], "development");

    std::env::set_var("ENVIRONMENT", "staging");

    // The variable is read per request, so the running server picks up the
    // new value without a restart.
    let body: serde_json::Value = client
        .get(format!("{}/info", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(body["environment"], "staging");

    let body: serde_json::Value = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(body["environment"], "staging");

    std::env::remove_var("ENVIRONMENT");
}
