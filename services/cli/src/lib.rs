mod cli;
mod commands;
mod input;

use ef_diagnostic::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
