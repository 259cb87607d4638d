use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use crate::network::{Amount, Distance, LineIndex, Network, StationIndex};
use crate::path::PathError;

// Shorter distance wins, then the lower surcharge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Cost {
    distance: Distance,
    surcharge: Amount,
}

impl Cost {
    const ZERO: Cost = Cost { distance: 0, surcharge: 0 };
    const INFINITE: Cost = Cost { distance: Distance::MAX, surcharge: Amount::MAX };
}

#[derive(Clone)]
struct TauEntry {
    cost: Cost,
    parent: Option<StationIndex>,
    // Line charging the surcharge in `cost`, if any line was used.
    surcharge_line: Option<LineIndex>,
}

impl Default for TauEntry {
    fn default() -> Self {
        Self { cost: Cost::INFINITE, parent: None, surcharge_line: None }
    }
}

/// Shortest route between two stations, before pricing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub stations: Vec<StationIndex>,
    pub distance: Distance,
    // Highest extra fare among the lines travelled.
    pub surcharge: Amount,
    pub surcharge_line: Option<LineIndex>,
}

/// Runs Dijkstra from `source` until `target` is settled.
///
/// Among routes of equal distance the one with the lower surcharge is returned. When two
/// predecessors reach a station at the same distance and surcharge, the one with the smaller
/// station index becomes its parent.
///
/// Routes whose length does not fit in a `Distance` are skipped. If only such routes reach the
/// target, the query fails with `DistanceOverflow` rather than `PathNotExists`.
pub fn dijkstra_query(network: &Network, source: StationIndex, target: StationIndex) -> Result<Route, PathError> {
    if source == target {
        return Err(PathError::DuplicatedSourceAndTarget);
    }
    if !network.has_sections(source) || !network.has_sections(target) {
        return Err(PathError::SectionNotExist);
    }

    let mut tau = vec![TauEntry::default(); network.num_stations()];
    tau[source as usize].cost = Cost::ZERO;

    let mut queue = BinaryHeap::new();
    queue.push(Reverse((Cost::ZERO, source)));
    let mut overflowed = false;

    while let Some(Reverse((cost, station))) = queue.pop() {
        if station == target {
            break;
        }
        // Stale entry, the station was already settled with a lower cost.
        if cost > tau[station as usize].cost {
            continue;
        }

        for edge in network.get_edges(station) {
            let extra_fare = network.get_line(edge.line).extra_fare;
            let current = &tau[station as usize];
            let (surcharge, surcharge_line) = if current.surcharge_line.is_none() || extra_fare > cost.surcharge {
                (extra_fare, Some(edge.line))
            } else {
                (cost.surcharge, current.surcharge_line)
            };
            let Some(distance) = cost.distance.checked_add(edge.distance) else {
                overflowed = true;
                continue;
            };
            let candidate = Cost { distance, surcharge };

            let next = &mut tau[edge.to as usize];
            if candidate < next.cost {
                trace!("Relaxed station {} via {station}: {} km.", edge.to, candidate.distance);
                *next = TauEntry { cost: candidate, parent: Some(station), surcharge_line };
                queue.push(Reverse((candidate, edge.to)));
            } else if candidate == next.cost && Some(station) < next.parent {
                // Same cost, so the station keeps its place in the queue.
                next.parent = Some(station);
                next.surcharge_line = surcharge_line;
            }
        }
    }

    let end = &tau[target as usize];
    if end.parent.is_none() {
        return Err(if overflowed { PathError::DistanceOverflow } else { PathError::PathNotExists });
    }

    // Parent pointers form a tree rooted at the source.
    let mut stations = vec![target];
    let mut current = end.parent;
    while let Some(station) = current {
        stations.push(station);
        current = tau[station as usize].parent;
    }
    stations.reverse();

    Ok(Route {
        stations,
        distance: end.cost.distance,
        surcharge: end.cost.surcharge,
        surcharge_line: end.surcharge_line,
    })
}
