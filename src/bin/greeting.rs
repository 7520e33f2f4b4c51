use std::io::{self, Write};

use tempconv::{greeting, read_line};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let tz = greeting::timezone_from_env()?;
    log::debug!("Timezone: {tz:?}");

    println!("¿Cuál es tu nombre?");
    io::stdout().flush()?;
    let line = read_line(&mut io::stdin().lock())?;
    let name = greeting::resolve_name(line.as_deref());

    println!("{}", greeting::greet(&name, greeting::current_hour(tz)));
    Ok(())
}
