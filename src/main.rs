use std::process::ExitCode;

use thread_archive::ArchiveError;
use thread_archive::cli::run;
use thread_archive::utils::{LogFormat, init_tracing};

fn main() -> ExitCode {
    if let Err(e) = init_tracing(LogFormat::from_env()) {
        eprintln!("Warning: {:#}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.chain().find_map(|cause| cause.downcast_ref::<ArchiveError>()) {
                Some(archive_err) => {
                    archive_err.log_details();
                    eprintln!("Error: {} (see log for details)", archive_err.user_message());
                }
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
