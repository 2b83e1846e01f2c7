use std::{io, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use comms::{
    ErrorResponse, RoundReport, START_PATH, STATUS_PATH, StartResponse, StatusResponse,
};
use log::{error, info};
use machine_learning::LinearModel;
use parking_lot::RwLock;
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    Coordinator, OrchestratorError, round::SimulationReport, transport::ClientTransport,
};

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    model: LinearModel,
    completed_rounds: usize,
    running: bool,
}

/// What the control API shares between requests: the coordinator itself and
/// the latest published view of the global model.
pub struct ControlState<T> {
    coordinator: Coordinator<T>,
    initial_model: LinearModel,
    snapshot: RwLock<Snapshot>,
    run_lock: Arc<Mutex<()>>,
}

impl<T> ControlState<T>
where
    T: ClientTransport + 'static,
{
    /// Creates a new `ControlState`.
    ///
    /// # Arguments
    /// * `coordinator` - The coordinator every simulation runs on.
    /// * `initial_model` - The model every simulation is reset to.
    pub fn new(coordinator: Coordinator<T>, initial_model: LinearModel) -> Self {
        Self {
            coordinator,
            initial_model,
            snapshot: RwLock::new(Snapshot {
                model: initial_model,
                completed_rounds: 0,
                running: false,
            }),
            run_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The current global model and progress. Never blocks on a running simulation.
    pub fn status(&self) -> StatusResponse {
        let snapshot = *self.snapshot.read();

        StatusResponse {
            current_global_model: snapshot.model.into(),
            global_rounds_planned: self.coordinator.settings().rounds().get(),
            completed_rounds: snapshot.completed_rounds,
            running: snapshot.running,
        }
    }

    /// Resets the global model and runs a full simulation.
    ///
    /// The simulation runs on its own task, so dropping the returned future
    /// doesn't interrupt it.
    ///
    /// # Errors
    /// `OrchestratorError::SimulationRunning` if another simulation hasn't finished yet.
    pub async fn start(self: Arc<Self>) -> Result<SimulationReport, OrchestratorError> {
        let guard = Arc::clone(&self.run_lock)
            .try_lock_owned()
            .map_err(|_| OrchestratorError::SimulationRunning)?;

        *self.snapshot.write() = Snapshot {
            model: self.initial_model,
            completed_rounds: 0,
            running: true,
        };

        info!("federated learning started");
        let state = Arc::clone(&self);
        let task = tokio::spawn(async move {
            let _guard = guard;
            let report = state
                .coordinator
                .run_simulation_with(state.initial_model, |outcome| {
                    let mut snapshot = state.snapshot.write();
                    snapshot.model = outcome.model;
                    snapshot.completed_rounds = outcome.round;
                })
                .await;

            state.snapshot.write().running = false;
            report
        });

        task.await.map_err(|e| {
            self.snapshot.write().running = false;
            OrchestratorError::SimulationAborted(e.to_string())
        })
    }
}

/// The coordinator's control surface: `POST /start` and `GET /status`.
pub fn router<T>(state: Arc<ControlState<T>>) -> Router
where
    T: ClientTransport + 'static,
{
    Router::new()
        .route(START_PATH, post(start::<T>))
        .route(STATUS_PATH, get(status::<T>))
        .with_state(state)
}

/// Serves the control API on an already bound listener until the server stops.
pub async fn serve<T>(listener: TcpListener, state: Arc<ControlState<T>>) -> io::Result<()>
where
    T: ClientTransport + 'static,
{
    let addr = listener.local_addr()?;
    info!("coordinator listening at {addr}");
    axum::serve(listener, router(state)).await
}

async fn start<T>(State(state): State<Arc<ControlState<T>>>) -> Response
where
    T: ClientTransport + 'static,
{
    match state.start().await {
        Ok(report) => Json(StartResponse {
            message: "Federated Learning simulation finished.".to_string(),
            final_model: report.final_model.into(),
            rounds: report.rounds.iter().map(RoundReport::from).collect(),
        })
        .into_response(),
        Err(e) => {
            let status = match e {
                OrchestratorError::SimulationRunning => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };

            error!("{START_PATH} failed: {e}");
            let body = ErrorResponse {
                error: e.to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}

async fn status<T>(State(state): State<Arc<ControlState<T>>>) -> Json<StatusResponse>
where
    T: ClientTransport + 'static,
{
    Json(state.status())
}
