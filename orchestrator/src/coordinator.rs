use futures::future::join_all;
use log::{debug, info, warn};
use machine_learning::LinearModel;
use tokio::time;

use crate::{
    ClientDescriptor, ClientFailure, ClientRegistry, ClientUpdate,
    aggregation::aggregate,
    configs::SimulationSettings,
    round::{RoundOutcome, RoundSummary, SimulationReport},
    transport::ClientTransport,
};

/// Drives FedAvg rounds over a fixed set of clients.
///
/// The coordinator holds no model of its own: the global model goes in and
/// comes out of every call, so each round's input is exactly the previous
/// round's output.
pub struct Coordinator<T> {
    transport: T,
    registry: ClientRegistry,
    settings: SimulationSettings,
}

impl<T> Coordinator<T>
where
    T: ClientTransport,
{
    /// Creates a new `Coordinator`.
    ///
    /// # Arguments
    /// * `transport` - How clients are reached.
    /// * `registry` - The clients taking part in every round.
    /// * `settings` - Round count, per-call timeout and pause between rounds.
    pub fn new(transport: T, registry: ClientRegistry, settings: SimulationSettings) -> Self {
        Self {
            transport,
            registry,
            settings,
        }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Runs a single round: sends `global` to every client at once, waits for
    /// all of them to settle and averages whatever came back.
    ///
    /// Clients that fail are left out. If none answered, the returned model is
    /// `global` itself.
    pub async fn run_round(&self, round: usize, global: LinearModel) -> RoundOutcome {
        info!(
            "starting global round {round}/{}, distributing model: {global}",
            self.settings.rounds()
        );

        let calls = self
            .registry
            .iter()
            .map(|client| self.call_client(client, global));
        let results = join_all(calls).await;

        let mut updates = Vec::with_capacity(results.len());
        let mut failures = Vec::new();

        for (client, result) in self.registry.iter().zip(results) {
            match result {
                Ok(update) => {
                    info!(client_id = client.id; "received update: {}", update.model);
                    updates.push(update);
                }
                Err(failure) => {
                    warn!(
                        client_id = client.id;
                        "skipping client at {}: {failure}", client.endpoint
                    );
                    failures.push((client.id, failure));
                }
            }
        }

        let (model, committed) = if updates.is_empty() {
            warn!("no clients responded in round {round}, global model unchanged");
            (global, false)
        } else {
            match aggregate(&updates) {
                Ok(model) => (model, true),
                Err(e) => {
                    warn!("round {round} discarded: {e}");
                    (global, false)
                }
            }
        };

        info!(
            "round {round} complete with {}/{} client(s), global model: {model}",
            updates.len(),
            self.registry.len()
        );

        RoundOutcome {
            round,
            distributed: global,
            model,
            updates,
            failures,
            committed,
        }
    }

    /// Runs every configured round starting from `initial`.
    pub async fn run_simulation(&self, initial: LinearModel) -> SimulationReport {
        self.run_simulation_with(initial, |_| {}).await
    }

    /// Same as `run_simulation`, calling `on_round` right after each round.
    pub async fn run_simulation_with<F>(
        &self,
        initial: LinearModel,
        mut on_round: F,
    ) -> SimulationReport
    where
        F: FnMut(&RoundOutcome) + Send,
    {
        let rounds = self.settings.rounds().get();
        let mut summaries = Vec::with_capacity(rounds);
        let mut model = initial;

        for round in 1..=rounds {
            if round > 1 && !self.settings.round_interval().is_zero() {
                time::sleep(self.settings.round_interval()).await;
            }

            let outcome = self.run_round(round, model).await;
            model = outcome.model;
            on_round(&outcome);
            summaries.push(RoundSummary::from(&outcome));
        }

        info!("simulation finished after {rounds} round(s), final model: {model}");
        SimulationReport {
            final_model: model,
            rounds: summaries,
        }
    }

    async fn call_client(
        &self,
        client: &ClientDescriptor,
        global: LinearModel,
    ) -> Result<ClientUpdate, ClientFailure> {
        debug!(client_id = client.id; "sending model to {}", client.endpoint);

        let timeout = self.settings.timeout();
        let update = match time::timeout(timeout, self.transport.train(client, global)).await {
            Ok(result) => result?,
            Err(_) => {
                debug!(client_id = client.id; "no answer after {timeout:?}");
                return Err(ClientFailure::Timeout);
            }
        };

        if !update.model.is_finite() {
            return Err(ClientFailure::NonFinite);
        }

        Ok(update)
    }
}
