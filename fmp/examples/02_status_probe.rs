mod common;
use common::{get_service, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let fmp = get_service();

    // The probe never retries, so this reflects the upstream right now.
    let status = fmp.check_status().await;
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
