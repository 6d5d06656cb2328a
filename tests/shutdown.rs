//! Graceful shutdown behaviour of the front door.

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_shutdown_drains_in_flight_requests() {
    let upstream = common::start_programmable_upstream(|| async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        (200, r#"{"ok":true}"#.to_string())
    })
    .await;
    let relay = common::start_relay(common::relay_config(Some(&upstream))).await;
    let client = common::http_client();

    let url = relay.url("/api/scheduler-proxy");
    let in_flight = tokio::spawn(async move {
        client
            .post(url)
            .json(&json!({"input_value": "p_1234 Ada"}))
            .send()
            .await
            .map(|r| r.status())
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    relay.shutdown.trigger();

    assert_eq!(in_flight.await.unwrap().unwrap(), StatusCode::OK);

    let result = tokio::time::timeout(Duration::from_secs(5), relay.task)
        .await
        .expect("server should stop after draining");
    assert!(result.unwrap().is_ok());
}

#[tokio::test]
async fn test_grace_period_bounds_shutdown() {
    let upstream = common::start_programmable_upstream(|| async {
        tokio::time::sleep(Duration::from_secs(30)).await;
        (200, r#"{"ok":true}"#.to_string())
    })
    .await;
    let mut config = common::relay_config(Some(&upstream));
    config.shutdown.grace_period_secs = 1;
    let relay = common::start_relay(config).await;
    let client = common::http_client();

    let url = relay.url("/api/adherence-proxy");
    let _hung = tokio::spawn(async move {
        let _ = client
            .post(url)
            .json(&json!({"input_value": "p_1234 Ada"}))
            .send()
            .await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    let start = Instant::now();
    relay.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), relay.task)
        .await
        .expect("server should stop once the grace period elapses");
    assert!(result.unwrap().is_ok());
    assert!(start.elapsed() >= Duration::from_millis(900));
}

#[tokio::test]
async fn test_no_new_connections_after_shutdown() {
    let relay = common::start_relay(common::relay_config(None)).await;
    let addr = relay.addr;
    relay.shutdown.trigger();

    tokio::time::timeout(Duration::from_secs(5), relay.task)
        .await
        .expect("idle server should stop promptly")
        .unwrap()
        .unwrap();

    let res = common::http_client()
        .get(format!("http://{}/health", addr))
        .send()
        .await;
    assert!(res.is_err());
}
