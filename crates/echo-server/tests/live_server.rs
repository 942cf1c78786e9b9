//! Tests against a real listener on an ephemeral port.

use std::net::SocketAddr;

use common::ResponsePayload;
use reqwest::StatusCode;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        echo_server::serve(listener, echo_server::create_app())
            .await
            .unwrap();
    });

    addr
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_over_tcp() {
    let addr = start_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/anything/nested/path"))
        .body("arbitrary body")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), r#"{"Test":true}"#);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests() {
    let addr = start_server().await;
    // One connection per request so the server handles them side by side.
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap();

    let mut requests = JoinSet::new();
    for i in 0..100 {
        let client = client.clone();
        let url = format!("http://{addr}/load/{i}");
        requests.spawn(async move {
            let response = client.get(url).send().await.unwrap();
            let status = response.status();
            let payload: ResponsePayload = response.json().await.unwrap();
            (status, payload)
        });
    }

    let mut completed = 0;
    while let Some(result) = requests.join_next().await {
        let (status, payload) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, ResponsePayload::new());
        completed += 1;
    }
    assert_eq!(completed, 100);
}
