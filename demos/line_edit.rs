use subway::{LineSections, Section};

use dev_utils::{build_example_chains, LINE_2, GANGNAM, SEOLLEUNG, YEOKSAM};

fn print_line(chain: &LineSections) {
    let stations: Vec<String> = chain.stations().iter().map(|station| station.to_string()).collect();
    println!("Line {}: {} ({} km)", chain.line(), stations.join(" - "), chain.total_distance());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut line_2 = build_example_chains().swap_remove(0);
    print_line(&line_2);

    // Station 20 lands between Gangnam and Yeoksam.
    let edit = line_2.insert(Section::new(GANGNAM, 20, 1, LINE_2)?)?;
    println!("Added {:?}, removed {:?}", edit.added, edit.removed);
    print_line(&line_2);

    // Too long to fit between Yeoksam and Seolleung.
    if let Err(e) = line_2.insert(Section::new(21, SEOLLEUNG, 2, LINE_2)?) {
        println!("Rejected: {e}");
    }

    for station in [20, YEOKSAM] {
        let edit = line_2.remove(station)?;
        println!("Added {:?}, removed {:?}", edit.added, edit.removed);
        print_line(&line_2);
    }

    Ok(())
}
