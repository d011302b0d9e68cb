//! Minimal end-to-end example: derive an energy, check a typed conversion and render the results.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use dimunit::{customary, dims, FormatSpec, HasDimensions, Length, Mass, Quantity, Time, TypedQuantity};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Mismatches are logged at debug level.
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let m = Quantity::from(Mass::GRAM * 250.0);
    let v = Quantity::from(Length(12.0)) / Quantity::from(Time(4.0));
    let kinetic = 0.5 * m * v.powi(2);
    assert_eq!(kinetic.dimensions(), dims::JOULE);
    println!("kinetic energy: {kinetic:.4}");

    let engine = customary::horsepower(110.0);
    let run = dimunit::mul([&engine, &Quantity::from(Time::HOUR)])?;
    println!("energy in an hour: {}", run.format(&"%.3e".parse::<FormatSpec>()?));

    let mut distance = Length::default();
    if let Err(err) = distance.assign_from(&run) {
        println!("not a length: {err} (value is now {distance})");
    }

    let total = dimunit::add([&kinetic, &run])?;
    println!("total: {total:#}");
    Ok(())
}
