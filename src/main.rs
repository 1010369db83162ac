use std::process::ExitCode;

fn main() -> ExitCode {
    match jsoncheck::cli::run_cli() {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
