use crate::graph::{Node, NumEdges};
use std::error::Error;
use thiserror::Error;

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// Violations of the invariants of [`crate::graph::CityGraph`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("road ({0}, {1}) is stored in only one direction or with different lengths")]
    Asymmetric(Node, Node),

    #[error("city {0} has a road to itself")]
    SelfLoop(Node),

    #[error("road ({0}, {1}) has length zero")]
    NonPositiveWeight(Node, Node),

    #[error("name index and adjacency disagree")]
    InconsistentIndex,

    #[error("graph stores {stored} roads, but adjacency contains {actual}")]
    EdgeCount { stored: NumEdges, actual: NumEdges },
}

/// Failures of the planning pipeline that are caused by its input rather than by
/// infeasibility (which is reported as a regular result).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("the road network contains no cities")]
    EmptyNetwork,

    #[error("\"{0}\" is not in the network")]
    UnknownCity(String),
}
