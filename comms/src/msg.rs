use serde::{Deserialize, Serialize};

/// The two parameters of a linear model as they travel on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelParams {
    pub w: f64,
    pub b: f64,
}

/// Coordinator -> client: train starting from this global model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainRequest {
    pub global_model: ModelParams,
}

/// Client -> coordinator: the locally trained model and the size of the data
/// it was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    pub local_model: ModelParams,
    pub data_size: u64,
}

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Per-round summary returned by the coordinator's start endpoint.
///
/// `successful` counts the updates that arrived. When their average wasn't
/// usable, `committed` is false and `model` is the one the round started from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: usize,
    pub model: ModelParams,
    pub successful: usize,
    pub failed: Vec<usize>,
    pub committed: bool,
}

/// Coordinator's answer once a full simulation finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartResponse {
    pub message: String,
    pub final_model: ModelParams,
    pub rounds: Vec<RoundReport>,
}

/// Coordinator's read-only view of its state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub current_global_model: ModelParams,
    pub global_rounds_planned: usize,
    pub completed_rounds: usize,
    pub running: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn train_request_matches_wire_shape() {
        let raw = json!({ "global_model": { "w": 0.5, "b": -1.0 } });
        let req: TrainRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(req.global_model, ModelParams { w: 0.5, b: -1.0 });
    }

    #[test]
    fn train_response_serializes_expected_keys() {
        let resp = TrainResponse {
            local_model: ModelParams { w: 1.25, b: 0.75 },
            data_size: 2,
        };

        let value = serde_json::to_value(resp).unwrap();
        assert_eq!(
            value,
            json!({ "local_model": { "w": 1.25, "b": 0.75 }, "data_size": 2 })
        );
    }

    #[test]
    fn negative_data_size_is_not_accepted() {
        let raw = json!({ "local_model": { "w": 1.0, "b": 0.0 }, "data_size": -3 });
        assert!(serde_json::from_value::<TrainResponse>(raw).is_err());
    }

    #[test]
    fn round_report_carries_commit_flag() {
        let report = RoundReport {
            round: 3,
            model: ModelParams { w: 1.0, b: 2.0 },
            successful: 2,
            failed: vec![4],
            committed: false,
        };

        let value = serde_json::to_value(report).unwrap();
        assert_eq!(
            value,
            json!({
                "round": 3,
                "model": { "w": 1.0, "b": 2.0 },
                "successful": 2,
                "failed": [4],
                "committed": false
            })
        );
    }

    #[test]
    fn missing_model_field_is_rejected() {
        let raw = json!({ "global_model": { "w": 1.0 } });
        assert!(serde_json::from_value::<TrainRequest>(raw).is_err());
    }
}
