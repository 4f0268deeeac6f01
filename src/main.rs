#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    msk_portfolio::server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    msk_portfolio::frontend::run();
}
