use subway::network::{Distance, StationId, RGB8};
use subway::{Line, LineSections, Network, PathRequest, Section, Station};

/// Raw records a query assembles its network from.
pub struct Records {
    pub stations: Vec<Station>,
    pub lines: Vec<Line>,
    pub sections: Vec<Section>,
}

impl Records {
    pub fn build_network(&self) -> Network {
        Network::new(&self.stations, &self.lines, &self.sections).unwrap()
    }
}

// Common example data for the demos, benchmarks and integration tests.

pub const LINE_2: u64 = 2;
pub const LINE_3: u64 = 3;
pub const SHINBUNDANG: u64 = 9;
pub const AIRPORT: u64 = 10;

pub const GANGNAM: StationId = 1;
pub const YEOKSAM: StationId = 2;
pub const SEOLLEUNG: StationId = 3;
pub const GYODAE: StationId = 4;
pub const SEOCHO: StationId = 5;
pub const NAMBU: StationId = 6;
pub const YANGJAE: StationId = 7;
pub const YANGJAE_FOREST: StationId = 8;
pub const MAEBONG: StationId = 9;
pub const CHEONGGYESAN: StationId = 10;
pub const SEOUL_STATION: StationId = 11;
pub const GONGDEOK: StationId = 12;
// Registered, but on no line.
pub const SADANG: StationId = 13;

pub fn example_stations() -> Vec<Station> {
    vec![
        Station::new(GANGNAM, "Gangnam"),
        Station::new(YEOKSAM, "Yeoksam"),
        Station::new(SEOLLEUNG, "Seolleung"),
        Station::new(GYODAE, "Gyodae"),
        Station::new(SEOCHO, "Seocho"),
        Station::new(NAMBU, "Nambu Bus Terminal"),
        Station::new(YANGJAE, "Yangjae"),
        Station::new(YANGJAE_FOREST, "Yangjae Citizen's Forest"),
        Station::new(MAEBONG, "Maebong"),
        Station::new(CHEONGGYESAN, "Cheonggyesan"),
        Station::new(SEOUL_STATION, "Seoul Station"),
        Station::new(GONGDEOK, "Gongdeok"),
        Station::new(SADANG, "Sadang"),
    ]
}

pub fn example_lines() -> Vec<Line> {
    vec![
        Line::new(LINE_2, "Line 2", RGB8::new(0x00, 0xA8, 0x4D), 0),
        Line::new(LINE_3, "Line 3", RGB8::new(0xEF, 0x7C, 0x1C), 0),
        Line::new(SHINBUNDANG, "Shinbundang", RGB8::new(0xD3, 0x1F, 0x45), 900),
        Line::new(AIRPORT, "Airport Railroad", RGB8::new(0x00, 0x90, 0xD2), 0),
    ]
}

fn section(up: StationId, down: StationId, distance: Distance, line: u64) -> Section {
    Section::new(up, down, distance, line).unwrap()
}

// Lines are grown through the same edits a line editor would make.
pub fn build_example_chains() -> Vec<LineSections> {
    // Seocho - Gyodae - Gangnam - Yeoksam - Seolleung.
    let mut line_2 = LineSections::new(section(SEOCHO, SEOLLEUNG, 12, LINE_2));
    line_2.insert(section(SEOCHO, GYODAE, 3, LINE_2)).unwrap();
    line_2.insert(section(YEOKSAM, SEOLLEUNG, 2, LINE_2)).unwrap();
    line_2.insert(section(GANGNAM, YEOKSAM, 2, LINE_2)).unwrap();

    // Gyodae - Nambu Bus Terminal - Yangjae - Maebong.
    let mut line_3 = LineSections::new(section(NAMBU, YANGJAE, 5, LINE_3));
    line_3.insert(section(GYODAE, NAMBU, 3, LINE_3)).unwrap();
    line_3.insert(section(YANGJAE, MAEBONG, 3, LINE_3)).unwrap();

    // Gangnam - Yangjae - Yangjae Citizen's Forest - Cheonggyesan.
    let mut shinbundang = LineSections::new(section(GANGNAM, CHEONGGYESAN, 12, SHINBUNDANG));
    shinbundang.insert(section(GANGNAM, YANGJAE, 4, SHINBUNDANG)).unwrap();
    shinbundang.insert(section(YANGJAE_FOREST, CHEONGGYESAN, 4, SHINBUNDANG)).unwrap();

    // Not connected to the rest of the network.
    let airport = LineSections::new(section(SEOUL_STATION, GONGDEOK, 8, AIRPORT));

    vec![line_2, line_3, shinbundang, airport]
}

pub fn example_records() -> Records {
    let sections = build_example_chains().iter().flat_map(|chain| chain.sections().iter().copied()).collect();
    Records { stations: example_stations(), lines: example_lines(), sections }
}

pub fn build_example_network() -> Network {
    Network::from_chains(&example_stations(), &example_lines(), &build_example_chains()).unwrap()
}

pub fn get_example_request() -> PathRequest {
    PathRequest::new(SEOCHO, CHEONGGYESAN, 30)
}

pub fn get_example_scenario() -> (Records, PathRequest) {
    (example_records(), get_example_request())
}

/// A `size` x `size` grid with one line per row and per column, random section lengths and
/// surcharges.
pub fn build_grid_records(size: u64, seed: u64) -> Records {
    fastrand::seed(seed);
    let id = |row: u64, col: u64| row * size + col + 1;

    let stations: Vec<Station> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .map(|(row, col)| Station::new(id(row, col), &format!("R{row}C{col}")))
        .collect();

    let mut lines = Vec::new();
    let mut sections = Vec::new();
    for i in 0..size {
        let row_line = 2 * i + 1;
        let col_line = 2 * i + 2;
        lines.push(Line::new(row_line, &format!("Row {i}"), RGB8::new(0, 0, 0), fastrand::u32(0..5) * 100));
        lines.push(Line::new(col_line, &format!("Column {i}"), RGB8::new(0, 0, 0), fastrand::u32(0..5) * 100));
        for j in 1..size {
            sections.push(section(id(i, j - 1), id(i, j), fastrand::u32(1..10), row_line));
            sections.push(section(id(j - 1, i), id(j, i), fastrand::u32(1..10), col_line));
        }
    }

    Records { stations, lines, sections }
}

pub fn get_grid_request(size: u64) -> PathRequest {
    PathRequest::new(1, size * size, 30)
}
