use std::process::ExitCode;

use gearmatch::server::start_server;

#[tokio::main]
async fn main() -> ExitCode {
    match start_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gearmatch: {e}");
            ExitCode::FAILURE
        }
    }
}
