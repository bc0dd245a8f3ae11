use dr_ceylon_frontend::app::App;
use dr_ceylon_frontend::{config, tracking};
use log::info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    tracking::install_error_logger();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
    tracking::welcome_banner();
}
