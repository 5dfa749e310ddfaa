use gherkin_verdict::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Set up i18n from the system locale before anything prints.
    gherkin_verdict::init();

    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
