use std::collections::HashSet;

use crate::OrchestratorError;

/// Identity and address of one client trainer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDescriptor {
    pub id: usize,
    pub endpoint: String,
}

impl ClientDescriptor {
    pub fn new(id: usize, endpoint: impl Into<String>) -> Self {
        Self {
            id,
            endpoint: endpoint.into(),
        }
    }
}

/// The fixed, ordered set of clients taking part in every round.
#[derive(Debug, Clone)]
pub struct ClientRegistry {
    clients: Vec<ClientDescriptor>,
}

impl ClientRegistry {
    /// Creates a new `ClientRegistry`.
    ///
    /// # Errors
    /// `OrchestratorError::InvalidConfig` if there are no clients, some id is
    /// repeated or some endpoint is blank.
    pub fn new(clients: Vec<ClientDescriptor>) -> Result<Self, OrchestratorError> {
        if clients.is_empty() {
            return Err(OrchestratorError::InvalidConfig(
                "at least one client is required".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(clients.len());
        for client in &clients {
            if !seen.insert(client.id) {
                return Err(OrchestratorError::InvalidConfig(format!(
                    "client id {} is repeated",
                    client.id
                )));
            }

            if client.endpoint.trim().is_empty() {
                return Err(OrchestratorError::InvalidConfig(format!(
                    "client {} has an empty endpoint",
                    client.id
                )));
            }
        }

        Ok(Self { clients })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientDescriptor> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_registry() {
        assert!(ClientRegistry::new(vec![]).is_err());
    }

    #[test]
    fn rejects_repeated_ids() {
        let clients = vec![
            ClientDescriptor::new(1, "http://a/train"),
            ClientDescriptor::new(1, "http://b/train"),
        ];
        assert!(ClientRegistry::new(clients).is_err());
    }

    #[test]
    fn keeps_insertion_order() {
        let clients = vec![
            ClientDescriptor::new(2, "http://b/train"),
            ClientDescriptor::new(1, "http://a/train"),
        ];
        let registry = ClientRegistry::new(clients).unwrap();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 2);

        let ids: Vec<_> = registry.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
