use std::process::ExitCode;

fn main() -> ExitCode {
    match glyphwave::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            glyphwave::ui::output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
