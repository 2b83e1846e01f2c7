use std::{io, sync::Arc};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use comms::{TRAIN_PATH, TrainRequest, TrainResponse};
use log::info;
use tokio::net::TcpListener;

use crate::{Result, Worker, WorkerErr};

/// The HTTP surface of a worker: a single `POST /train` route.
pub fn router(worker: Arc<Worker>) -> Router {
    Router::new()
        .route(TRAIN_PATH, post(train))
        .with_state(worker)
}

/// Serves `worker` on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, worker: Worker) -> io::Result<()> {
    let addr = listener.local_addr()?;
    info!("client {} listening at {addr}", worker.id());
    axum::serve(listener, router(Arc::new(worker))).await
}

async fn train(
    State(worker): State<Arc<Worker>>,
    payload: std::result::Result<Json<TrainRequest>, JsonRejection>,
) -> Result<Json<TrainResponse>> {
    let Json(req) = payload.map_err(|e| WorkerErr::BadRequest(e.body_text()))?;
    info!("client {} received {TRAIN_PATH} request", worker.id());
    worker.handle_train(req).map(Json)
}
