use urlgrab_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse_args();

    // Initialize logging as early as possible.
    if cli.log_file {
        if let Err(err) = logging::init_logging() {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
        }
    } else {
        logging::init_logging_stderr();
    }

    match cli.run() {
        Ok(status) => std::process::exit(status.code()),
        Err(err) => {
            eprintln!("urlgrab error: {:#}", err);
            std::process::exit(1);
        }
    }
}
