//! ai-flags binary entry point.

use std::process::ExitCode;

use ai_flags::ui::output;

fn main() -> ExitCode {
    match ai_flags::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
