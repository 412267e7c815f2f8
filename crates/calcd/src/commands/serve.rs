//! The `serve` command: run the HTTP service.

use crate::config::ServerConfig;
use crate::server::serve;

pub fn run_serve(config: ServerConfig) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: cannot start async runtime: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = runtime.block_on(serve(config)) {
        tracing::error!(%err, "server stopped");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
