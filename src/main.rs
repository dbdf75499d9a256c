use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use flight_data::FlightRecord;
use flight_service::FlightService;
use logger::{Color, Logger, LoggerError};
use tower::events::{LandedEvent, TakeOffEvent};
use tower::flight::TowerFlight;

fn clean_scr() {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush().ok();
}

fn prompt_input(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().expect("Failed to flush stdout");
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input.trim().to_string()
}

fn flight_by_id(service: &FlightService, id: &str) -> Option<FlightRecord> {
    service.flights().into_iter().find(|record| record.id == id)
}

fn add_flight(service: &FlightService) {
    clean_scr();
    let airliner = prompt_input("Enter the airline name: ");
    let id = prompt_input("Enter the flight id: ");
    let destination = prompt_input("Enter the destination: ");
    let duration_input = prompt_input("Enter the scheduled duration (hours): ");

    if airliner.is_empty() || id.is_empty() || destination.is_empty() {
        println!("Please provide valid flight details.");
        return;
    }
    let duration = match input_parser::parse_positive_f64(&duration_input) {
        Some(duration) => duration,
        None => {
            println!("The duration must be a positive number of hours.");
            return;
        }
    };

    let record = FlightRecord::new(airliner, id, destination, duration);
    match service.add_flight(record) {
        Ok(()) => println!("Flight registered with the tower."),
        Err(e) => println!("{}", e),
    }
}

fn take_off(service: &FlightService) {
    let id = prompt_input("Enter the flight id: ");
    match flight_by_id(service, &id) {
        Some(record) => {
            if let Err(e) = service.take_off_flight(&record) {
                println!("{}", e);
            }
        }
        None => println!("Flight not found: {}", id),
    }
}

fn change_height(service: &FlightService) {
    let id = prompt_input("Enter the flight id: ");
    let record = match flight_by_id(service, &id) {
        Some(record) => record,
        None => {
            println!("Flight not found: {}", id);
            return;
        }
    };

    let change_input = prompt_input("Enter the altitude change in feet (negative descends): ");
    let change_value = match input_parser::parse_int_in_range(&change_input, -100_000, 100_000) {
        Some(value) => value,
        None => {
            println!("The altitude change must be a whole number of feet.");
            return;
        }
    };

    if let Err(e) = service.change_flight_height(&record, change_value) {
        println!("{}", e);
    }
}

fn land(service: &FlightService) {
    let id = prompt_input("Enter the flight id: ");
    match flight_by_id(service, &id) {
        Some(record) => {
            if let Err(e) = service.land_flight(&record) {
                println!("{}", e);
            }
        }
        None => println!("Flight not found: {}", id),
    }
}

fn list_flights(service: &FlightService) {
    let flights = service.flights();
    if flights.is_empty() {
        println!("No flights registered.");
        return;
    }

    println!(
        "\n{:<10} {:<15} {:<20} {:<10} {:<10} {:<10}",
        "Flight", "Airline", "Destination", "Status", "Altitude", "Departed"
    );
    for record in flights {
        let status = if record.in_flight { "in flight" } else { "grounded" };
        let departed = record
            .departure_time
            .map(|time| time.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:<15} {:<20} {:<10} {:<10} {:<10}",
            record.id, record.airliner, record.destination, status, record.altitude, departed
        );
    }
}

fn list_schedule(service: &FlightService) {
    let flights = service.scheduled_flights();
    if flights.is_empty() {
        println!("Nothing has been scheduled yet.");
        return;
    }

    println!("\n{:<10} {:<15} {:<20} {:<10}", "Flight", "Airline", "Destination", "Hours");
    for record in flights {
        println!(
            "{:<10} {:<15} {:<20} {:<10}",
            record.id, record.airliner, record.destination, record.duration
        );
    }
}

fn add_test_data(service: &FlightService) {
    use rand::Rng;

    let airlines = ["AirlineA", "AirlineB", "AirlineC", "NorthWind", "Meridian"];
    let destinations = [
        "DestinationA",
        "DestinationB",
        "Oslo",
        "Lisbon",
        "Reykjavik",
        "Montevideo",
    ];

    let mut rng = rand::thread_rng();
    for _ in 0..6 {
        let airliner = airlines[rng.gen_range(0..airlines.len())];
        let destination = destinations[rng.gen_range(0..destinations.len())];
        let id = format!("FL{:04}", rng.gen_range(1000..10000));
        let duration = rng.gen_range(2..=8) as f64;

        let record = FlightRecord::new(
            airliner.to_string(),
            id,
            destination.to_string(),
            duration,
        );
        if let Err(e) = service.add_flight(record) {
            println!("{}", e);
            return;
        }
    }

    println!("Test data added successfully!");
}

fn print_help() {
    clean_scr();
    println!("Available commands:");
    println!("  add-flight");
    println!("    Registers a new flight with the tower. You'll be prompted for each detail.");
    println!("  take-off");
    println!("    Clears a grounded flight for takeoff.");
    println!("  change-height");
    println!("    Changes the altitude of an airborne flight by a given amount.");
    println!("  land");
    println!("    Lands a flight.");
    println!("  list-flights");
    println!("    Shows the live state of every tracked flight.");
    println!("  list-schedule");
    println!("    Shows the flights as they were originally scheduled.");
    println!("  test-data");
    println!("    Adds six randomly generated flights.");
    println!("  exit");
    println!("    Closes this application.");
}

fn main() -> Result<(), LoggerError> {
    let log_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("logs"));
    let logger = Logger::new(&log_dir, "main")?;

    let service = FlightService::new();

    let takeoff_log = logger.clone();
    service.subscribe_to_take_off(Arc::new(move |event: &TakeOffEvent| {
        let line = format!(
            "Flight {} took off towards {}.",
            event.flight.id(),
            event.flight.destination()
        );
        if takeoff_log.info(&line, Color::Green, true).is_err() {
            eprintln!("Failed to write the takeoff log line.");
        }
    }));

    let landing_log = logger.clone();
    service.subscribe_to_landing(Arc::new(move |event: &LandedEvent| {
        let line = format!("Flight {} landed.", event.flight.id());
        if landing_log.info(&line, Color::Cyan, true).is_err() {
            eprintln!("Failed to write the landing log line.");
        }
    }));

    loop {
        println!("Enter command (type '-h' or 'help' for options): ");
        let mut command = String::new();
        io::stdin()
            .read_line(&mut command)
            .expect("Failed to read input");

        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }

        match args[0] {
            "add-flight" => add_flight(&service),

            "take-off" => take_off(&service),

            "change-height" => change_height(&service),

            "land" => land(&service),

            "list-flights" => list_flights(&service),

            "list-schedule" => list_schedule(&service),

            "test-data" => {
                clean_scr();
                add_test_data(&service);
            }

            "-h" | "help" => print_help(),

            "exit" => break,

            _ => eprintln!("Invalid command. Use -h for help."),
        }
    }

    Ok(())
}
