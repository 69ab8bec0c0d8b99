use anyhow::Result;
use magscraper::service::{RunContext, Service, GETTERS};
use std::{env, fs};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Usage: magscraper [--sandboxed] [getter ...]
///
/// With no getter names, every preset in the catalog runs. `--sandboxed`
/// routes downloads through the CORS proxy and writes into `user_data/`
/// instead of `datafiles/`.
fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // ─── 2) parse args, configure service ────────────────────────────
    let mut args: Vec<String> = env::args().skip(1).collect();
    let ctx = if let Some(pos) = args.iter().position(|a| a == "--sandboxed") {
        args.remove(pos);
        RunContext::Sandboxed
    } else {
        RunContext::Local
    };
    let service = Service::new(ctx);
    fs::create_dir_all(service.session_dir())?;

    let getters: Vec<&str> = if args.is_empty() {
        GETTERS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };
    info!(count = getters.len(), "running getters");

    // ─── 3) run each getter, keep going on failure ───────────────────
    let mut failed = 0usize;
    for name in &getters {
        match service.run(name) {
            Ok(table) => info!(getter = name, rows = table.num_rows(), "done"),
            Err(e) => {
                error!(getter = name, "failed: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} getter(s) failed", getters.len());
    }
    info!("all done");
    Ok(())
}
