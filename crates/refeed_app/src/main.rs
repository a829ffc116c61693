use std::fmt::Display;
use std::process;

use refeed_engine::{FetchSettings, ReqwestFetcher};

use refeed_app::config::Config;
use refeed_app::run::run;

fn main() {
    feed_logging::initialize();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => fail(&err),
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => fail(&err),
    };

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    match runtime.block_on(run(&config, &fetcher)) {
        Ok(report) => log::info!(
            "rewrote {} item dates; wrote {} bytes to {}",
            report.items_rewritten,
            report.bytes_written,
            report.output_path.display()
        ),
        Err(err) => fail(&err),
    }
}

fn fail(err: &dyn Display) -> ! {
    log::error!("{err}");
    process::exit(1);
}
