use log::{error, info};

mod behavior;
mod config;
mod dom;
mod error;

use dom::PageController;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site behavior");
    match PageController::install() {
        Ok(_) => info!("Page behavior installed"),
        Err(e) => error!("Page behavior not installed: {}", e),
    }
}
