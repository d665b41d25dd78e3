//! End-to-end planning: supply sites, road failure analysis and the delivery tour.

use crate::{
    errors::PlanError,
    exact::{DominatingSet, minimum_dominating_set, solve_with_budget},
    graph::*,
    resilience::critical_edges,
    tour::{Tour, TourPlanner},
};
use itertools::Itertools;
use log::info;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Default)]
pub struct PlanOptions {
    /// If set, first check whether this many supply sites suffice
    pub budget: Option<NumNodes>,
    /// Name of the city the delivery tour starts from (case-insensitive); the first city if unset
    pub start: Option<String>,
}

/// Outcome of the feasibility check for a user-provided budget
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetCheck {
    pub budget: NumNodes,
    pub supplies: Option<DominatingSet>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisasterPlan {
    pub budget_check: Option<BudgetCheck>,
    pub supplies: DominatingSet,
    pub critical_edges: Vec<WeightedEdge>,
    pub start: Node,
    pub tour: Option<Tour>,
}

impl DisasterPlan {
    /// Runs all stages on `graph`. The graph is modified temporarily while roads are tested
    /// and is unchanged when this function returns.
    pub fn compute(graph: &mut CityGraph, options: &PlanOptions) -> Result<Self, PlanError> {
        if graph.is_empty() {
            return Err(PlanError::EmptyNetwork);
        }

        let start = match &options.start {
            Some(name) => graph
                .find_city_ignore_case(name)
                .ok_or_else(|| PlanError::UnknownCity(name.trim().to_owned()))?,
            None => 0,
        };

        let budget_check = options.budget.map(|budget| BudgetCheck {
            budget,
            supplies: solve_with_budget(&*graph, budget),
        });

        let supplies = minimum_dominating_set(&*graph).ok_or(PlanError::EmptyNetwork)?;
        let critical_edges = critical_edges(graph, &supplies);

        info!("Plan delivery tour from {}", graph.name_of(start));
        let tour = TourPlanner::new(&*graph).plan(start, supplies.as_slice());

        Ok(Self {
            budget_check,
            supplies,
            critical_edges,
            start,
            tour,
        })
    }

    /// Translates all ids into city names
    pub fn report<'a>(&self, graph: &'a CityGraph) -> PlanReport<'a> {
        PlanReport {
            budget_check: self.budget_check.as_ref().map(|check| BudgetReport {
                budget: check.budget,
                supplies: check
                    .supplies
                    .as_ref()
                    .map(|domset| graph.names_of(domset.iter())),
            }),
            minimum_sites: self.supplies.len(),
            supplies: graph.names_of(self.supplies.iter()),
            critical_roads: self
                .critical_edges
                .iter()
                .map(|&WeightedEdge(u, v, length)| RoadReport {
                    from: graph.name_of(u),
                    to: graph.name_of(v),
                    length,
                })
                .collect(),
            start: graph.name_of(self.start),
            tour: self.tour.as_ref().map(|tour| TourReport {
                stops: graph.names_of(tour.stops().iter().copied()),
                cost: tour.cost(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BudgetReport<'a> {
    pub budget: NumNodes,
    pub supplies: Option<Vec<&'a str>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoadReport<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub length: Weight,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TourReport<'a> {
    pub stops: Vec<&'a str>,
    pub cost: Distance,
}

/// A [`DisasterPlan`] in terms of city names
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlanReport<'a> {
    pub budget_check: Option<BudgetReport<'a>>,
    pub minimum_sites: usize,
    pub supplies: Vec<&'a str>,
    pub critical_roads: Vec<RoadReport<'a>>,
    pub start: &'a str,
    pub tour: Option<TourReport<'a>>,
}

fn bracketed(names: &[&str]) -> String {
    format!("[{}]", names.iter().join(", "))
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(check) = &self.budget_check {
            match &check.supplies {
                Some(names) => writeln!(
                    f,
                    "Supply sites for k={}: {}",
                    check.budget,
                    bracketed(names)
                )?,
                None => writeln!(f, "Cannot cover all cities with k={} sites.", check.budget)?,
            }
        }

        writeln!(
            f,
            "Minimum sites needed: k={} -> {}",
            self.minimum_sites,
            bracketed(&self.supplies)
        )?;

        if self.critical_roads.is_empty() {
            writeln!(f, "Network is redundant under any single road failure.")?;
        } else {
            let roads = self
                .critical_roads
                .iter()
                .map(|road| format!("{}-{}", road.from, road.to))
                .join(", ");
            writeln!(f, "To ensure redundancy, consider adding roads: [{roads}]")?;
        }

        match &self.tour {
            Some(tour) => writeln!(
                f,
                "Best tour: {} (length {})",
                bracketed(&tour.stops),
                tour.cost
            ),
            None => writeln!(
                f,
                "No delivery tour from {} reaches every supply site.",
                self.start
            ),
        }
    }
}
