mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_user(base_url: &str) -> Result<i64> {
    let client = reqwest::Client::new();
    let name = common::unique("chat");
    let res = client
        .post(format!("{}/users", base_url))
        .json(&json!({
            "username": name,
            "email": format!("{}@example.com", name),
            "role": "student",
            "password": "longenough"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    Ok(body["data"]["id"].as_i64().expect("id"))
}

#[tokio::test]
async fn conversation_interleaves_both_directions_by_time() -> Result<()> {
    if !common::live_tests_enabled() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let alma = create_user(&server.base_url).await?;
    let bo = create_user(&server.base_url).await?;

    for (from, to, content) in [
        (alma, bo, "did you finish the lab?"),
        (bo, alma, "almost, stuck on part 3"),
        (alma, bo, "office hours at 4"),
    ] {
        let res = client
            .post(format!("{}/messages", server.base_url))
            .json(&json!({
                "sender_id": from,
                "receiver_id": to,
                "content": content
            }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // Same thread regardless of which participant comes first in the path
    for path in [
        format!("{}/messages/{}/{}", server.base_url, alma, bo),
        format!("{}/messages/{}/{}", server.base_url, bo, alma),
    ] {
        let res = client.get(&path).send().await?;
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.json::<Value>().await?;
        let thread = body["data"].as_array().expect("array");
        assert_eq!(thread.len(), 3, "body: {}", body);
        assert_eq!(thread[0]["content"], "did you finish the lab?");
        assert_eq!(thread[1]["sender_id"], bo);
        assert_eq!(thread[2]["content"], "office hours at 4");
    }
    Ok(())
}

#[tokio::test]
async fn empty_conversation_is_an_empty_list() -> Result<()> {
    if !common::live_tests_enabled() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let a = create_user(&server.base_url).await?;
    let b = create_user(&server.base_url).await?;

    let res = client
        .get(format!("{}/messages/{}/{}", server.base_url, a, b))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true, "body: {}", body);
    assert_eq!(body["data"], json!([]), "body: {}", body);
    Ok(())
}
