use dev_utils::*;
use subway::network::RGB8;
use subway::path::QueryResult;
use subway::{
    create_path, create_path_from_chains, find_path, FarePolicy, Line, LineSections, NetworkError, PathError,
    PathRequest, QueryError, Section, Station,
};

fn query(records: &Records, request: PathRequest) -> QueryResult {
    create_path(&records.stations, &records.lines, &records.sections, &request)
}

// Gangnam --10-- Yeoksam --10-- Seolleung on Line 2, Gyodae --10-- Yangjae on Line 3.
fn two_disjoint_lines() -> Records {
    let stations = vec![
        Station::new(GANGNAM, "Gangnam"),
        Station::new(YEOKSAM, "Yeoksam"),
        Station::new(SEOLLEUNG, "Seolleung"),
        Station::new(GYODAE, "Gyodae"),
        Station::new(YANGJAE, "Yangjae"),
        Station::new(SADANG, "Sadang"),
    ];
    let lines = vec![
        Line::new(LINE_2, "Line 2", RGB8::new(0x00, 0xA8, 0x4D), 0),
        Line::new(LINE_3, "Line 3", RGB8::new(0xEF, 0x7C, 0x1C), 0),
    ];
    let sections = vec![
        Section::new(GANGNAM, YEOKSAM, 10, LINE_2).unwrap(),
        Section::new(YEOKSAM, SEOLLEUNG, 10, LINE_2).unwrap(),
        Section::new(GYODAE, YANGJAE, 10, LINE_3).unwrap(),
    ];
    Records { stations, lines, sections }
}

#[test]
fn creates_path_along_one_line() {
    let path = query(&two_disjoint_lines(), PathRequest::new(GANGNAM, SEOLLEUNG, 20)).unwrap();

    assert_eq!(path.station_ids(), vec![GANGNAM, YEOKSAM, SEOLLEUNG]);
    assert_eq!(path.distance, 20);
    assert_eq!(path.fare.amount(), 1450);
}

#[test]
fn same_source_and_target_fails() {
    let result = query(&two_disjoint_lines(), PathRequest::new(GANGNAM, GANGNAM, 15));
    assert_eq!(result, Err(QueryError::Path(PathError::DuplicatedSourceAndTarget)));
}

#[test]
fn station_without_sections_fails() {
    let result = query(&two_disjoint_lines(), PathRequest::new(GANGNAM, SADANG, 15));
    assert_eq!(result, Err(QueryError::Path(PathError::SectionNotExist)));
}

#[test]
fn disjoint_lines_have_no_path() {
    let result = query(&two_disjoint_lines(), PathRequest::new(GANGNAM, YANGJAE, 15));
    assert_eq!(result, Err(QueryError::Path(PathError::PathNotExists)));
}

#[test]
fn example_lines_are_built_in_order() {
    let chains = build_example_chains();
    assert_eq!(chains[0].stations(), vec![SEOCHO, GYODAE, GANGNAM, YEOKSAM, SEOLLEUNG]);
    assert_eq!(chains[0].total_distance(), 12);
    assert_eq!(chains[1].stations(), vec![GYODAE, NAMBU, YANGJAE, MAEBONG]);
    assert_eq!(chains[2].stations(), vec![GANGNAM, YANGJAE, YANGJAE_FOREST, CHEONGGYESAN]);
    assert_eq!(chains[2].total_distance(), 12);
}

#[test]
fn transfers_to_the_shorter_line() {
    let (records, request) = get_example_scenario();
    let path = query(&records, request).unwrap();

    assert_eq!(path.station_ids(), vec![SEOCHO, GYODAE, NAMBU, YANGJAE, YANGJAE_FOREST, CHEONGGYESAN]);
    assert_eq!(path.distance, 19);
    assert_eq!(path.surcharge, 900);
    assert_eq!(path.surcharge_line.map(|line| line.id), Some(SHINBUNDANG));
    assert_eq!(path.fare.amount(), 1450 + 900);
}

#[test]
fn surcharge_applies_to_short_trips() {
    let path = query(&example_records(), PathRequest::new(GANGNAM, YANGJAE, 40)).unwrap();

    assert_eq!(path.station_ids(), vec![GANGNAM, YANGJAE]);
    assert_eq!(path.distance, 4);
    assert_eq!(path.fare.amount(), 1250 + 900);
}

#[test]
fn no_surcharge_without_premium_line() {
    let path = query(&example_records(), PathRequest::new(SEOCHO, MAEBONG, 40)).unwrap();

    assert_eq!(path.station_ids(), vec![SEOCHO, GYODAE, NAMBU, YANGJAE, MAEBONG]);
    assert_eq!(path.distance, 14);
    assert_eq!(path.fare.amount(), 1350);
}

#[test]
fn isolated_line_is_unreachable() {
    let result = query(&example_records(), PathRequest::new(GANGNAM, GONGDEOK, 40));
    assert_eq!(result, Err(QueryError::Path(PathError::PathNotExists)));
}

#[test]
fn removing_a_station_reroutes() {
    let mut chains = build_example_chains();
    // Without Yangjae, Line 3 runs Nambu - Maebong and Shinbundang runs Gangnam - Yangjae Citizen's Forest.
    chains[1].remove(YANGJAE).unwrap();
    chains[2].remove(YANGJAE).unwrap();
    let (stations, lines) = (example_stations(), example_lines());

    assert_eq!(
        create_path_from_chains(&stations, &lines, &chains, &PathRequest::new(GANGNAM, YANGJAE, 40)),
        Err(QueryError::Path(PathError::SectionNotExist))
    );
    let path = create_path_from_chains(&stations, &lines, &chains, &PathRequest::new(GANGNAM, YANGJAE_FOREST, 40)).unwrap();
    assert_eq!(path.station_ids(), vec![GANGNAM, YANGJAE_FOREST]);
    assert_eq!(path.distance, 8);
}

#[test]
fn chains_survive_storage_round_trip() {
    for chain in build_example_chains() {
        let mut stored = chain.sections().to_vec();
        stored.reverse();
        let restored = LineSections::from_sections(chain.line(), stored).unwrap();
        assert_eq!(restored, chain);
    }
}

#[test]
fn grid_paths_are_found() {
    let path = query(&build_grid_records(8, 1), get_grid_request(8)).unwrap();

    assert_eq!(path.station_ids().first(), Some(&1));
    assert_eq!(path.station_ids().last(), Some(&64));
    // At least one hop per row and column, at most the longest sections.
    assert!(path.stations.len() >= 15);
    assert!(path.distance >= 14 && path.distance <= 14 * 9);
}

#[test]
fn prebuilt_network_gives_the_same_path() {
    let network = build_example_network();
    let request = get_example_request();
    let path = find_path(&network, &request, &FarePolicy::default()).unwrap();
    assert_eq!(path, query(&example_records(), request).unwrap());
}

#[test]
fn invalid_records_fail_before_searching() {
    let mut records = example_records();
    records.stations.push(Station::new(GANGNAM, "Gangnam (again)"));
    assert_eq!(
        query(&records, get_example_request()),
        Err(QueryError::Network(NetworkError::DuplicateStation(GANGNAM)))
    );
}
