use std::{env, process::ExitCode};

use catena::List;
use options::Options;
use subscriber::DemoSubscriber;
use tracing::error;

mod options;
mod scenario;
mod subscriber;

fn main() -> ExitCode {
    let options = match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("catena-demo: {err}");
            return ExitCode::FAILURE;
        }
    };

    let subscriber = DemoSubscriber::new(options.log, options.color);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("catena-demo: {err}");
    }

    match scenario::run(options.count, List::print) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.as_error_code(), "{err}");
            ExitCode::FAILURE
        }
    }
}
