use subway::create_path;

use dev_utils::get_example_scenario;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (records, request) = get_example_scenario();
    records.build_network().print_stats();

    let path = create_path(&records.stations, &records.lines, &records.sections, &request)?;
    println!("{path}");

    Ok(())
}
