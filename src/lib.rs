//! Exact planning of disaster relief logistics on a road network: minimum sets of supply
//! sites dominating every city, single road failure analysis, and optimal delivery tours.

pub mod errors;
pub mod exact;
pub mod graph;
pub mod io;
pub mod log;
pub mod planner;
pub mod resilience;
pub mod tour;

pub mod prelude {
    pub use super::errors::*;
    pub use super::exact::*;
    pub use super::graph::*;
    pub use super::io::*;
    pub use super::planner::*;
    pub use super::resilience::*;
    pub use super::tour::*;
}

#[cfg(test)]
mod testing;
