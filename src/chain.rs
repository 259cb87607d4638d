use std::collections::{HashMap, HashSet};

use log::debug;

use crate::network::{Distance, LineId, StationId};
use crate::section::{Section, SectionError};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ChainError {
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error("A line needs at least one section.")]
    Empty,
    #[error("Section belongs to line {found}, not line {expected}.")]
    WrongLine { expected: LineId, found: LineId },
    #[error("Sections do not form a single unbranched chain.")]
    Disconnected,
    #[error("Both stations of the section are already on the line.")]
    SectionAlreadyExists,
    #[error("Neither station of the section is on the line.")]
    NoConnectedStation,
    #[error("A section inserted between two stations must be shorter than the section it splits.")]
    InvalidDistance,
    #[error("Station {0} is not on the line.")]
    StationNotInLine(StationId),
    #[error("The last section of a line cannot be removed.")]
    LastSection,
}

pub type ChainResult<T> = Result<T, ChainError>;

/// Sections written and deleted by one chain edit, for the caller to persist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Edit {
    pub added: Vec<Section>,
    pub removed: Vec<Section>,
}

/// The sections of one line, ordered from the up terminal to the down terminal.
///
/// Consecutive sections always share a station and no station appears twice, so the line is a
/// single simple path. Every edit keeps it that way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSections {
    line: LineId,
    sections: Vec<Section>,
}

impl LineSections {
    pub fn new(first_section: Section) -> Self {
        Self { line: first_section.line(), sections: vec![first_section] }
    }

    /// Orders sections in the arbitrary order storage hands them out.
    pub fn from_sections(line: LineId, sections: Vec<Section>) -> ChainResult<Self> {
        if sections.is_empty() {
            return Err(ChainError::Empty);
        }

        let mut by_up_station = HashMap::with_capacity(sections.len());
        let mut down_stations = HashSet::with_capacity(sections.len());
        for section in &sections {
            if section.line() != line {
                return Err(ChainError::WrongLine { expected: line, found: section.line() });
            }
            // Two sections leaving one station, or two arriving at one, is a branch.
            if by_up_station.insert(section.up_station(), *section).is_some()
                || !down_stations.insert(section.down_station())
            {
                return Err(ChainError::Disconnected);
            }
        }

        let mut heads = sections.iter().filter(|section| !down_stations.contains(&section.up_station()));
        let head = match (heads.next(), heads.next()) {
            (Some(head), None) => *head,
            _ => return Err(ChainError::Disconnected),
        };

        let mut ordered = Vec::with_capacity(sections.len());
        let mut current = Some(head);
        while let Some(section) = current {
            ordered.push(section);
            if ordered.len() > sections.len() {
                return Err(ChainError::Disconnected);
            }
            current = by_up_station.get(&section.down_station()).copied();
        }
        if ordered.len() != sections.len() {
            return Err(ChainError::Disconnected);
        }

        Ok(Self { line, sections: ordered })
    }

    pub fn line(&self) -> LineId { self.line }

    pub fn sections(&self) -> &[Section] { &self.sections }

    pub fn len(&self) -> usize { self.sections.len() }

    // Always false: a chain cannot lose its last section.
    pub fn is_empty(&self) -> bool { self.sections.is_empty() }

    pub fn up_terminal(&self) -> StationId { self.sections[0].up_station() }

    pub fn down_terminal(&self) -> StationId { self.sections[self.sections.len() - 1].down_station() }

    pub fn stations(&self) -> Vec<StationId> {
        std::iter::once(self.up_terminal())
            .chain(self.sections.iter().map(Section::down_station))
            .collect()
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.sections.iter().any(|section| section.contains(station))
    }

    pub fn total_distance(&self) -> Distance {
        self.sections.iter().map(Section::distance).sum()
    }

    /// Adds a section sharing exactly one station with the line.
    ///
    /// A section touching a terminal from outside extends the line. Otherwise it lands inside the
    /// existing section with the same up or down station, which is split around it.
    pub fn insert(&mut self, section: Section) -> ChainResult<Edit> {
        if section.line() != self.line {
            return Err(ChainError::WrongLine { expected: self.line, found: section.line() });
        }

        match (self.contains(section.up_station()), self.contains(section.down_station())) {
            (true, true) => return Err(ChainError::SectionAlreadyExists),
            (false, false) => return Err(ChainError::NoConnectedStation),
            _ => {}
        }

        if section.down_station() == self.up_terminal() {
            debug!("Line {}: extending up terminal with {} -> {}.", self.line, section.up_station(), section.down_station());
            self.sections.insert(0, section);
            return Ok(Edit { added: vec![section], removed: Vec::new() });
        }
        if section.up_station() == self.down_terminal() {
            debug!("Line {}: extending down terminal with {} -> {}.", self.line, section.up_station(), section.down_station());
            self.sections.push(section);
            return Ok(Edit { added: vec![section], removed: Vec::new() });
        }

        let position = self
            .sections
            .iter()
            .position(|existing| {
                existing.up_station() == section.up_station() || existing.down_station() == section.down_station()
            })
            .ok_or(ChainError::NoConnectedStation)?;
        let existing = self.sections[position];

        if section.is_greater_or_equal_to(&existing) {
            return Err(ChainError::InvalidDistance);
        }

        let remainder = existing.create_section_in_between(&section)?;
        let replacement = if existing.up_station() == section.up_station() {
            [section, remainder]
        } else {
            [remainder, section]
        };
        self.sections.splice(position..=position, replacement);

        debug!(
            "Line {}: split {} -> {} at position {position}.",
            self.line,
            existing.up_station(),
            existing.down_station()
        );
        Ok(Edit { added: replacement.to_vec(), removed: vec![existing] })
    }

    /// Takes a station off the line, joining its neighbours if it sat between two sections.
    pub fn remove(&mut self, station: StationId) -> ChainResult<Edit> {
        if !self.contains(station) {
            return Err(ChainError::StationNotInLine(station));
        }
        if self.sections.len() == 1 {
            return Err(ChainError::LastSection);
        }

        let upper = self.sections.iter().position(|section| section.down_station() == station);
        let lower = self.sections.iter().position(|section| section.up_station() == station);

        let edit = match (upper, lower) {
            (Some(upper), Some(lower)) => {
                debug_assert_eq!(upper + 1, lower);
                let removed = vec![self.sections[upper], self.sections[lower]];
                let merged = self.sections[upper].merge(&self.sections[lower])?;
                self.sections.splice(upper..=lower, [merged]);
                Edit { added: vec![merged], removed }
            }
            (Some(terminal), None) | (None, Some(terminal)) => {
                let removed = self.sections.remove(terminal);
                Edit { added: Vec::new(), removed: vec![removed] }
            }
            (None, None) => return Err(ChainError::StationNotInLine(station)),
        };

        debug!("Line {}: removed station {station}.", self.line);
        Ok(edit)
    }
}
