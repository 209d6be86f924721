use coffee_order::lifecycle::{setup_tracing, ShopConfig};
use coffee_order::menu::MenuController;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let config = ShopConfig::from_args();
    setup_tracing(config.log_filter.as_deref());

    info!(customer = %config.customer_name, "Coffee shop open");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = MenuController::new(stdin.lock(), stdout.lock(), config.customer_name);

    match controller.run() {
        Ok(summary) => {
            info!(orders = summary.orders_placed, ended_by = ?summary.ended_by, "Session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Session failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
