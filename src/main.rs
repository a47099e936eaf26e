//! worklogger main entrypoint.

use worklogger::run;

fn main() {
    if let Err(e) = run() {
        worklogger::ui::messages::error(e);
        std::process::exit(1);
    }
}
