use std::collections::HashMap;
use std::fmt::Display;
use std::rc::Rc;

use log::{debug, info};

pub use rgb::RGB8;

use crate::chain::LineSections;
use crate::section::Section;
use crate::utils;

pub type StationId = u64;
pub type LineId = u64;
pub type SectionId = u64;

// Kilometres.
pub type Distance = u32;
// Won.
pub type Amount = u32;
pub type Age = u32;

pub type StationIndex = u32;
pub type LineIndex = u32;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Station {
    pub id: StationId,
    pub name: Rc<str>,
}

impl Station {
    pub fn new(id: StationId, name: &str) -> Self {
        Self { id, name: Rc::from(name) }
    }
}

impl Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: Rc<str>,
    pub color: RGB8,
    // Charged once per path, for the most expensive line used.
    pub extra_fare: Amount,
}

impl Line {
    pub fn new(id: LineId, name: &str, color: RGB8, extra_fare: Amount) -> Self {
        Self { id, name: Rc::from(name), color, extra_fare }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, utils::get_color_str(self.color))
    }
}

// One direction of travel along a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub to: StationIndex,
    pub distance: Distance,
    pub line: LineIndex,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StationEdges {
    pub edges_idx: usize,
    pub num_edges: usize,
}

impl StationEdges {
    pub fn get_edges<'a>(&self, edges: &'a [Edge]) -> &'a [Edge] {
        &edges[self.edges_idx..(self.edges_idx + self.num_edges)]
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Section references unknown station {0}.")]
    UnknownStation(StationId),
    #[error("Section references unknown line {0}.")]
    UnknownLine(LineId),
    #[error("Station {0} is registered more than once.")]
    DuplicateStation(StationId),
    #[error("Line {0} is registered more than once.")]
    DuplicateLine(LineId),
}

/// Weighted station graph assembled from every line's sections.
///
/// Stations and lines are addressed by dense indices in the order they were supplied. Each section
/// contributes an edge in both directions, since riders travel either way along a line. Edges are
/// stored contiguously per station, so `get_edges` is a slice lookup.
pub struct Network {
    pub stations: Vec<Station>,
    pub station_index: HashMap<StationId, StationIndex>,
    pub lines: Vec<Line>,
    pub line_index: HashMap<LineId, LineIndex>,
    pub edges: Vec<Edge>,
    pub station_edges: Vec<StationEdges>,
}

impl Network {
    pub fn new(stations: &[Station], lines: &[Line], sections: &[Section]) -> Result<Self, NetworkError> {
        assert!(
            stations.len() < StationIndex::MAX as usize,
            "Too many stations ({}) in network (we currently use a {}-bit index for stations).",
            stations.len(),
            utils::get_size_bits::<StationIndex>()
        );

        let mut station_index = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if station_index.insert(station.id, i as StationIndex).is_some() {
                return Err(NetworkError::DuplicateStation(station.id));
            }
        }

        let mut line_index = HashMap::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            if line_index.insert(line.id, i as LineIndex).is_some() {
                return Err(NetworkError::DuplicateLine(line.id));
            }
        }

        // Both directions of every section, keyed by the station they leave from.
        let mut directed = Vec::with_capacity(sections.len() * 2);
        for section in sections {
            let up = *station_index
                .get(&section.up_station())
                .ok_or(NetworkError::UnknownStation(section.up_station()))?;
            let down = *station_index
                .get(&section.down_station())
                .ok_or(NetworkError::UnknownStation(section.down_station()))?;
            let line = *line_index.get(&section.line()).ok_or(NetworkError::UnknownLine(section.line()))?;

            directed.push((up, Edge { to: down, distance: section.distance(), line }));
            directed.push((down, Edge { to: up, distance: section.distance(), line }));
        }

        // Sorting keeps edge order independent of section order, which keeps queries deterministic.
        directed.sort_unstable();

        let mut edges = Vec::with_capacity(directed.len());
        let mut station_edges = vec![StationEdges::default(); stations.len()];
        let mut directed = directed.into_iter().peekable();
        for (station_idx, entry) in station_edges.iter_mut().enumerate() {
            entry.edges_idx = edges.len();
            while let Some((_, edge)) = directed.next_if(|(from, _)| *from as usize == station_idx) {
                edges.push(edge);
            }
            entry.num_edges = edges.len() - entry.edges_idx;
        }

        debug!(
            "Built network with {} stations, {} lines and {} edges from {} sections.",
            stations.len(),
            lines.len(),
            edges.len(),
            sections.len()
        );

        Ok(Self {
            stations: stations.to_vec(),
            station_index,
            lines: lines.to_vec(),
            line_index,
            edges,
            station_edges,
        })
    }

    pub fn from_chains(stations: &[Station], lines: &[Line], chains: &[LineSections]) -> Result<Self, NetworkError> {
        let sections: Vec<Section> = chains.iter().flat_map(|chain| chain.sections().iter().copied()).collect();
        Self::new(stations, lines, &sections)
    }

    pub fn get_station(&self, station: StationIndex) -> &Station { &self.stations[station as usize] }

    pub fn get_station_idx(&self, station_id: StationId) -> Option<StationIndex> {
        self.station_index.get(&station_id).copied()
    }

    pub fn get_station_idx_from_name(&self, name: &str) -> Option<StationIndex> {
        self.stations.iter().position(|station| &*station.name == name).map(|i| i as StationIndex)
    }

    pub fn get_line(&self, line: LineIndex) -> &Line { &self.lines[line as usize] }

    pub fn get_line_idx(&self, line_id: LineId) -> Option<LineIndex> { self.line_index.get(&line_id).copied() }

    pub fn get_edges(&self, station: StationIndex) -> &[Edge] {
        self.station_edges[station as usize].get_edges(&self.edges)
    }

    // A station belongs to the graph only if some section references it.
    pub fn has_sections(&self, station: StationIndex) -> bool {
        self.station_edges[station as usize].num_edges > 0
    }

    pub fn num_stations(&self) -> usize { self.stations.len() }

    pub fn num_lines(&self) -> usize { self.lines.len() }

    pub fn num_edges(&self) -> usize { self.edges.len() }

    pub fn print_stats(&self) {
        info!(
            "Network has {} stations, {} lines and {} sections.",
            self.num_stations(),
            self.num_lines(),
            self.num_edges() / 2
        );
    }
}
