use std::fs::File;
use std::process::ExitCode;
use bimatch::{InputError, Instance};
use tracing::error;

fn run() -> Result<(), InputError> {
    let instance = match std::env::args().nth(1) {
        Some(path) => Instance::from_reader(File::open(path)?)?,
        None => Instance::from_stdin()?,
    };
    let g = instance.into_graph()?;
    println!("Greedy: {}", g.greedy_match().cardinality());
    println!("Exact: {}", g.exact_match()?.cardinality());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Read the instance from the given file, or from stdin.
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
