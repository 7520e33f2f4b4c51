use std::io::{self, Write};

use tempconv::{run_self_check, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    run_self_check(&mut output)?;

    let mut session = Session::new();
    session.run(&mut input, &mut output)?;
    output.flush()?;

    Ok(())
}
