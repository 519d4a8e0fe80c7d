//! rHRMS main entrypoint.

use rhrms::run;
use rhrms::ui::messages::report;

fn main() {
    println!();
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
