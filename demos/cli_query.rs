use std::io::{stdout, Write};

use subway::network::StationId;
use subway::{create_path, Network, PathRequest};

use dev_utils::example_records;

pub fn get_station_from_user(network: &Network, prompt: &str) -> Result<StationId, std::io::Error> {
    loop {
        print!("Where are you {prompt}? ");
        stdout().flush()?;
        let mut station_name = String::new();
        std::io::stdin().read_line(&mut station_name)?;
        if let Some(station) = network.get_station_idx_from_name(station_name.trim()) {
            return Ok(network.get_station(station).id);
        }
        println!("Station not found. Please try again.");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let records = example_records();
    let network = records.build_network();
    network.print_stats();

    let source = get_station_from_user(&network, "starting")?;
    let target = get_station_from_user(&network, "going")?;
    let age = loop {
        let mut age_str = String::new();
        print!("How old are you? ");
        stdout().flush()?;
        std::io::stdin().read_line(&mut age_str)?;
        match age_str.trim().parse() {
            Ok(age) => break age,
            Err(e) => println!("Invalid age: {e}. Please try again."),
        }
    };

    println!();
    // Each query assembles its own graph from the records.
    match create_path(&records.stations, &records.lines, &records.sections, &PathRequest::new(source, target, age)) {
        Ok(path) => println!("{path}"),
        Err(e) => println!("{e}"),
    }

    Ok(())
}
