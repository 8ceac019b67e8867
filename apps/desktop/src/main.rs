#![windows_subsystem = "windows"]

use tubeform_desktop::DesktopApp;
use tubeform_domain::config::AppConfig;
use tubeform_kernel::config::load_config_or_default;
use tubeform_logger::Logger;

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    let config: AppConfig = load_config_or_default(std::env::args().nth(1));
    DesktopApp::new().with_config(config).launch(tubeform_ui::App);

    Ok(())
}
