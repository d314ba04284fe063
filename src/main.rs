//! roomchart main entrypoint.

use roomchart::run;
use roomchart::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
