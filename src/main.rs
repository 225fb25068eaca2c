#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use portfolio_site::server;

    server::init_logging();
    if let Err(e) = server::run().await {
        tracing::error!("server stopped: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point instead
}
