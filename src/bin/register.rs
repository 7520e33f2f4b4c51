use std::io::{self, BufRead, Write};

use tempconv::{read_line, registration};

fn ask<R: BufRead>(input: &mut R, label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut input = io::stdin().lock();
    let name = ask(&mut input, "Nombre")?;
    let email = ask(&mut input, "Email")?;
    let age = registration::parse_age(&ask(&mut input, "Edad")?);

    let result = registration::register(&name, &email, age);
    println!("{}", registration::format_registration(&result));
    Ok(())
}
