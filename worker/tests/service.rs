use std::{io, net::SocketAddr, num::NonZeroUsize};

use comms::{ErrorResponse, ModelParams, TrainRequest, TrainResponse};
use tokio::net::TcpListener;
use worker::{DatasetConfig, WorkerBuilder, WorkerConfig};

async fn spawn_worker(x: Vec<f64>, y: Vec<f64>, learning_rate: f64) -> io::Result<SocketAddr> {
    let config = WorkerConfig {
        id: 7,
        host: "127.0.0.1".into(),
        port: 0,
        learning_rate,
        local_epochs: NonZeroUsize::new(10).unwrap(),
        dataset: DatasetConfig { x, y },
    };
    let worker = WorkerBuilder::build(config).map_err(io::Error::other)?;

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(worker::serve(listener, worker));
    Ok(addr)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn train_endpoint_returns_local_model_and_data_size() -> io::Result<()> {
    let addr = spawn_worker(vec![3.0, 4.0], vec![4.0, 5.0], 0.01).await?;

    let req = TrainRequest {
        global_model: ModelParams { w: 0.0, b: 0.0 },
    };
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/train"))
        .json(&req)
        .send()
        .await
        .map_err(io::Error::other)?;

    assert!(resp.status().is_success());
    let body: TrainResponse = resp.json().await.map_err(io::Error::other)?;

    assert_eq!(body.data_size, 2);
    assert!(body.local_model.w > 0.0);
    assert!(body.local_model.b > 0.0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn repeated_requests_yield_identical_models() -> io::Result<()> {
    let addr = spawn_worker(vec![1.0, 2.0], vec![2.0, 3.0], 0.01).await?;
    let client = reqwest::Client::new();
    let req = TrainRequest {
        global_model: ModelParams { w: 0.5, b: 0.25 },
    };

    let mut answers = Vec::new();
    for _ in 0..2 {
        let body: TrainResponse = client
            .post(format!("http://{addr}/train"))
            .json(&req)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(io::Error::other)?
            .json()
            .await
            .map_err(io::Error::other)?;
        answers.push(body);
    }

    assert_eq!(answers[0], answers[1]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn malformed_body_is_a_bad_request() -> io::Result<()> {
    let addr = spawn_worker(vec![1.0, 2.0], vec![2.0, 3.0], 0.01).await?;

    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/train"))
        .header("content-type", "application/json")
        .body(r#"{ "model": 3 }"#)
        .send()
        .await
        .map_err(io::Error::other)?;

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: ErrorResponse = resp.json().await.map_err(io::Error::other)?;
    assert!(body.error.starts_with("bad request"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn divergent_training_is_a_server_error() -> io::Result<()> {
    let addr = spawn_worker(vec![1.0e150, 2.0e150], vec![1.0, 2.0], 10.0).await?;

    let req = TrainRequest {
        global_model: ModelParams { w: 0.0, b: 0.0 },
    };
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/train"))
        .json(&req)
        .send()
        .await
        .map_err(io::Error::other)?;

    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
