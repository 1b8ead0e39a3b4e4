//! Per-flow processing flags.
//!
//! DESIGN
//! ======
//! Each user-facing flow (payment, split deploy, donation, ticket purchase)
//! may have at most one settlement in flight. `begin` claims the flow and
//! returns a guard; dropping the guard releases it, so early returns and
//! errors cannot leave a flow stuck.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    Payment,
    Split,
    Donation,
    Ticket,
}

impl Flow {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Split => "split",
            Self::Donation => "donation",
            Self::Ticket => "ticket",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{} is already processing", .0.as_str())]
pub struct Busy(pub Flow);

#[derive(Clone, Default)]
pub struct Processing {
    active: Arc<Mutex<HashSet<Flow>>>,
}

impl Processing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `flow`, failing if it is already in flight.
    pub fn begin(&self, flow: Flow) -> Result<ProcessingGuard, Busy> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if !active.insert(flow) {
            return Err(Busy(flow));
        }
        Ok(ProcessingGuard { flow, active: Arc::clone(&self.active) })
    }

    #[must_use]
    pub fn is_active(&self, flow: Flow) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&flow)
    }

    /// Flows currently in flight, in a stable order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Flow> {
        let mut flows: Vec<Flow> = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .copied()
            .collect();
        flows.sort();
        flows
    }
}

/// Releases its flow on drop.
pub struct ProcessingGuard {
    flow: Flow,
    active: Arc<Mutex<HashSet<Flow>>>,
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.flow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_claims_and_drop_releases() {
        let processing = Processing::new();
        {
            let _guard = processing.begin(Flow::Payment).unwrap();
            assert!(processing.is_active(Flow::Payment));
        }
        assert!(!processing.is_active(Flow::Payment));
    }

    #[test]
    fn second_begin_on_same_flow_is_busy() {
        let processing = Processing::new();
        let _guard = processing.begin(Flow::Ticket).unwrap();
        let err = processing.begin(Flow::Ticket).err().unwrap();
        assert_eq!(err.0, Flow::Ticket);
        assert_eq!(err.to_string(), "ticket is already processing");
    }

    #[test]
    fn flows_are_independent() {
        let processing = Processing::new();
        let _a = processing.begin(Flow::Donation).unwrap();
        let _b = processing.begin(Flow::Split).unwrap();
        assert_eq!(processing.snapshot(), vec![Flow::Split, Flow::Donation]);
    }

    #[test]
    fn clones_share_flags() {
        let processing = Processing::new();
        let other = processing.clone();
        let _guard = processing.begin(Flow::Payment).unwrap();
        assert!(other.begin(Flow::Payment).is_err());
    }
}
