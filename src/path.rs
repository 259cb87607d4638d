use std::fmt::Display;

use log::debug;

use crate::chain::LineSections;
use crate::dijkstra::dijkstra_query;
use crate::fare::{Fare, FarePolicy};
use crate::network::{Age, Amount, Distance, Line, Network, NetworkError, Station, StationId};
use crate::section::Section;
use crate::utils;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Source and target stations cannot be the same.")]
    DuplicatedSourceAndTarget,
    #[error("No section exists for the source or target station.")]
    SectionNotExist,
    #[error("No path exists from the source to the target station.")]
    PathNotExists,
    #[error("The path is too long to measure.")]
    DistanceOverflow,
}

pub type PathResult = Result<Path, PathError>;

/// Failure of a query that assembles its own network from raw records.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Path(#[from] PathError),
}

pub type QueryResult = Result<Path, QueryError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathRequest {
    pub source: StationId,
    pub target: StationId,
    pub age: Age,
}

impl PathRequest {
    pub fn new(source: StationId, target: StationId, age: Age) -> Self {
        Self { source, target, age }
    }
}

/// A priced trip between two stations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    // Source to target, inclusive.
    pub stations: Vec<Station>,
    pub distance: Distance,
    pub fare: Fare,
    pub surcharge: Amount,
    pub surcharge_line: Option<Line>,
}

impl Path {
    pub fn station_ids(&self) -> Vec<StationId> {
        self.stations.iter().map(|station| station.id).collect()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-----------------------------------------------")?;
        writeln!(f)?;
        for (i, station) in self.stations.iter().enumerate() {
            if i == 0 {
                writeln!(f, "Depart from {station}.")?;
            } else if i + 1 == self.stations.len() {
                writeln!(f, "Arrive at {station}.")?;
            } else {
                writeln!(f, "  via {station}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Total distance: {}.", utils::get_distance_str(self.distance))?;
        if let Some(line) = self.surcharge_line.as_ref().filter(|_| self.surcharge > 0) {
            writeln!(f, "Line surcharge: {} ({line}).", utils::get_fare_str(self.surcharge))?;
        }
        writeln!(f, "Fare: {}.", self.fare)?;
        writeln!(f, "-----------------------------------------------")?;
        Ok(())
    }
}

/// Builds the network from `stations`, `lines` and `sections`, then finds and prices the shortest
/// path for `request`. Nothing is cached between calls.
pub fn create_path(stations: &[Station], lines: &[Line], sections: &[Section], request: &PathRequest) -> QueryResult {
    create_path_with_policy(stations, lines, sections, request, &FarePolicy::default())
}

pub fn create_path_with_policy(
    stations: &[Station],
    lines: &[Line],
    sections: &[Section],
    request: &PathRequest,
    policy: &FarePolicy,
) -> QueryResult {
    // Checked before the network is built, so a trivial request costs nothing.
    if request.source == request.target {
        return Err(PathError::DuplicatedSourceAndTarget.into());
    }
    let network = Network::new(stations, lines, sections)?;
    Ok(find_path(&network, request, policy)?)
}

pub fn create_path_from_chains(
    stations: &[Station],
    lines: &[Line],
    chains: &[LineSections],
    request: &PathRequest,
) -> QueryResult {
    if request.source == request.target {
        return Err(PathError::DuplicatedSourceAndTarget.into());
    }
    let network = Network::from_chains(stations, lines, chains)?;
    Ok(find_path(&network, request, &FarePolicy::default())?)
}

/// Finds the shortest path for `request` on an already assembled network and prices it under
/// `policy`.
pub fn find_path(network: &Network, request: &PathRequest, policy: &FarePolicy) -> PathResult {
    if request.source == request.target {
        return Err(PathError::DuplicatedSourceAndTarget);
    }

    // A station the network has never heard of has no sections either.
    let source = network.get_station_idx(request.source).ok_or(PathError::SectionNotExist)?;
    let target = network.get_station_idx(request.target).ok_or(PathError::SectionNotExist)?;

    let route = dijkstra_query(network, source, target)?;
    let fare = policy.fare_for_age(route.distance, route.surcharge, request.age);

    debug!(
        "Path {} -> {}: {} stations, {} km, fare {} (age {}).",
        request.source,
        request.target,
        route.stations.len(),
        route.distance,
        fare.amount(),
        request.age
    );

    Ok(Path {
        stations: route.stations.iter().map(|&station| network.get_station(station).clone()).collect(),
        distance: route.distance,
        fare,
        surcharge: route.surcharge,
        surcharge_line: route.surcharge_line.map(|line| network.get_line(line).clone()),
    })
}
