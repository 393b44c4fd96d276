use rgb_histogram::{cli, logging, pipeline};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing(false);

    let result = cli::parse_args(std::env::args_os()).and_then(|input| pipeline::run(&input));

    match result {
        Ok(written) => {
            for path in &written {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.log_and_report();
            ExitCode::FAILURE
        }
    }
}
