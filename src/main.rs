//! vendcal main entrypoint.

use vendcal::run;
use vendcal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
