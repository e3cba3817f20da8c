mod app;
mod bootstrap;
mod clap_app;
mod directories;

use app::App;
use std::process;
use strkit::error::*;

/// Returns `Err(..)` upon fatal errors. Otherwise, returns `Ok(true)` on full success and
/// `Ok(false)` if the command produced no result (a warning was printed).
fn run() -> Result<bool> {
    let app = App::new()?;
    app.start()
}

/// Maps the outcome of a run to the process exit code
fn exit_code(result: &Result<bool>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}

fn main() {
    let result = run();

    if let Err(error) = &result {
        let stderr = std::io::stderr();
        default_error_handler(error, &mut stderr.lock());
    }
    process::exit(exit_code(&result));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&Ok(true)), 0);
        assert_eq!(exit_code(&Ok(false)), 1);
        assert_eq!(
            exit_code(&Err(Error::ArgsProcessingError("bad count".to_string()))),
            1
        );
    }
}
