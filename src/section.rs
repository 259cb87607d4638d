use crate::network::{Distance, LineId, SectionId, StationId};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SectionError {
    #[error("Up and down stations of a section must differ (station {0}).")]
    DuplicatedStations(StationId),
    #[error("Section distance must be positive.")]
    NonPositiveDistance,
    #[error("Merged section distance does not fit in a distance value.")]
    DistanceOverflow,
}

pub type SectionResult<T> = Result<T, SectionError>;

/// A directed stretch of track between two adjacent stations of one line.
///
/// Sections are values: splitting or merging returns new sections and leaves the inputs untouched.
/// Stations and the owning line are referenced by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Section {
    id: Option<SectionId>,
    up_station: StationId,
    down_station: StationId,
    distance: Distance,
    line: LineId,
}

impl Section {
    /// Fails if both ends are the same station or the distance is zero.
    pub fn with_id(
        id: Option<SectionId>,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
        line: LineId,
    ) -> SectionResult<Self> {
        if up_station == down_station {
            return Err(SectionError::DuplicatedStations(up_station));
        }
        if distance == 0 {
            return Err(SectionError::NonPositiveDistance);
        }
        Ok(Self { id, up_station, down_station, distance, line })
    }

    pub fn new(up_station: StationId, down_station: StationId, distance: Distance, line: LineId) -> SectionResult<Self> {
        Self::with_id(None, up_station, down_station, distance, line)
    }

    pub fn id(&self) -> Option<SectionId> { self.id }

    pub fn up_station(&self) -> StationId { self.up_station }

    pub fn down_station(&self) -> StationId { self.down_station }

    pub fn distance(&self) -> Distance { self.distance }

    pub fn line(&self) -> LineId { self.line }

    pub fn contains(&self, station: StationId) -> bool {
        self.up_station == station || self.down_station == station
    }

    // Inserting `other` into `self` is only valid when this is false.
    pub fn is_greater_or_equal_to(&self, other: &Section) -> bool {
        self.distance >= other.distance
    }

    /// The part of `self` left over when `section` occupies its downstream end: `self.up -> section.up`.
    ///
    /// Fails with `NonPositiveDistance` unless `section` is shorter than `self`.
    pub fn create_section_by_up_station(&self, section: &Section) -> SectionResult<Section> {
        Section::with_id(self.id, self.up_station, section.up_station, self.remaining_distance(section), self.line)
    }

    /// The part of `self` left over when `section` occupies its upstream end: `section.down -> self.down`.
    ///
    /// Fails with `NonPositiveDistance` unless `section` is shorter than `self`.
    pub fn create_section_by_down_station(&self, section: &Section) -> SectionResult<Section> {
        Section::with_id(self.id, section.down_station, self.down_station, self.remaining_distance(section), self.line)
    }

    /// Splits `self` around `section`, which shares either the up or the down station with it.
    ///
    /// Returns the remainder that, together with `section`, covers the original stretch. The remainder
    /// keeps this section's id.
    pub fn create_section_in_between(&self, section: &Section) -> SectionResult<Section> {
        if self.up_station == section.up_station {
            return self.create_section_by_down_station(section);
        }
        self.create_section_by_up_station(section)
    }

    /// Joins `self` with the section directly below it, dropping their shared station.
    ///
    /// Requires `self.down_station == section.up_station`; this is not checked.
    pub fn merge(&self, section: &Section) -> SectionResult<Section> {
        let distance = self.distance.checked_add(section.distance).ok_or(SectionError::DistanceOverflow)?;
        Section::new(self.up_station, section.down_station, distance, self.line)
    }

    fn remaining_distance(&self, section: &Section) -> Distance {
        self.distance.saturating_sub(section.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: LineId = 1;

    fn section(up: StationId, down: StationId, distance: Distance) -> Section {
        Section::new(up, down, distance, LINE).unwrap()
    }

    #[test]
    fn rejects_same_up_and_down_station() {
        assert_eq!(Section::new(1, 1, 10, LINE), Err(SectionError::DuplicatedStations(1)));
        assert_eq!(Section::with_id(Some(3), 2, 2, 10, LINE), Err(SectionError::DuplicatedStations(2)));
    }

    #[test]
    fn rejects_zero_distance() {
        assert_eq!(Section::new(1, 2, 0, LINE), Err(SectionError::NonPositiveDistance));
    }

    #[test]
    fn split_leaving_nothing_fails() {
        let existing = section(1, 2, 10);
        assert_eq!(existing.create_section_in_between(&section(1, 3, 10)), Err(SectionError::NonPositiveDistance));
        assert_eq!(existing.create_section_in_between(&section(3, 2, 12)), Err(SectionError::NonPositiveDistance));
    }

    #[test]
    fn compares_distance() {
        let long = section(1, 2, 10);
        assert!(section(1, 3, 10).is_greater_or_equal_to(&long));
        assert!(section(1, 3, 11).is_greater_or_equal_to(&long));
        assert!(!section(1, 3, 9).is_greater_or_equal_to(&long));
    }

    #[test]
    fn splits_by_up_station() {
        // 1 --10-- 2, inserting 3 -> 2 (4).
        let existing = Section::with_id(Some(7), 1, 2, 10, LINE).unwrap();
        let inserted = section(3, 2, 4);

        let remainder = existing.create_section_by_up_station(&inserted).unwrap();
        assert_eq!(remainder, Section::with_id(Some(7), 1, 3, 6, LINE).unwrap());
    }

    #[test]
    fn splits_by_down_station() {
        // 1 --10-- 2, inserting 1 -> 3 (4).
        let existing = Section::with_id(Some(7), 1, 2, 10, LINE).unwrap();
        let inserted = section(1, 3, 4);

        let remainder = existing.create_section_by_down_station(&inserted).unwrap();
        assert_eq!(remainder, Section::with_id(Some(7), 3, 2, 6, LINE).unwrap());
    }

    #[test]
    fn in_between_dispatches_on_shared_station() {
        let existing = section(1, 2, 10);

        let shared_up = section(1, 3, 3);
        let remainder = existing.create_section_in_between(&shared_up).unwrap();
        assert_eq!((remainder.up_station(), remainder.down_station(), remainder.distance()), (3, 2, 7));

        let shared_down = section(3, 2, 3);
        let remainder = existing.create_section_in_between(&shared_down).unwrap();
        assert_eq!((remainder.up_station(), remainder.down_station(), remainder.distance()), (1, 3, 7));
    }

    #[test]
    fn split_distance_is_the_difference() {
        fastrand::seed(11);
        for _ in 0..200 {
            let original = fastrand::u32(2..1000);
            let inserted = fastrand::u32(1..original);
            let existing = section(1, 2, original);

            for new in [section(1, 3, inserted), section(3, 2, inserted)] {
                let remainder = existing.create_section_in_between(&new).unwrap();
                assert_eq!(remainder.distance(), original - inserted);
                assert!(remainder.distance() > 0);
                assert_eq!(remainder.distance() + new.distance(), existing.distance());
            }
        }
    }

    #[test]
    fn merges_adjacent_sections() {
        let upper = Section::with_id(Some(1), 1, 2, 4, LINE).unwrap();
        let lower = Section::with_id(Some(2), 2, 3, 6, LINE).unwrap();

        let merged = upper.merge(&lower).unwrap();
        assert_eq!(merged, section(1, 3, 10));
        assert_eq!(merged.id(), None);
    }

    #[test]
    fn merging_a_loop_back_fails() {
        let there = section(1, 2, 4);
        let back = section(2, 1, 4);
        assert_eq!(there.merge(&back), Err(SectionError::DuplicatedStations(1)));
    }

    #[test]
    fn merge_reports_distance_overflow() {
        let upper = section(1, 2, Distance::MAX);
        let lower = section(2, 3, 1);
        assert_eq!(upper.merge(&lower), Err(SectionError::DistanceOverflow));
    }

    #[test]
    fn merge_is_associative_in_distance() {
        fastrand::seed(5);
        for _ in 0..200 {
            let a = section(1, 2, fastrand::u32(1..100));
            let b = section(2, 3, fastrand::u32(1..100));
            let c = section(3, 4, fastrand::u32(1..100));

            let left = a.merge(&b).unwrap().merge(&c).unwrap();
            let right = a.merge(&b.merge(&c).unwrap()).unwrap();
            assert_eq!(left.distance(), a.distance() + b.distance() + c.distance());
            assert_eq!(left, right);
        }
    }
}
