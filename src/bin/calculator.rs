use std::io::{self, Write};

use tempconv::calculator::{format_calculation, run_calculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut output = io::stdout().lock();
    writeln!(output, "== Calculadora ==")?;
    match run_calculator(&mut io::stdin().lock(), &mut output)? {
        Some(result) => writeln!(output, "{}", format_calculation(&result))?,
        None => log::debug!("end of input"),
    }
    Ok(())
}
