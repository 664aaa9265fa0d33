//! Minimal walkthrough: size a filter, add three items, query four.
use std::process::ExitCode;

use bloomset::BloomFilter;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut filter = match BloomFilter::new(1000, 0.01) {
        Ok(filter) => filter,
        Err(e) => {
            error!(error = %e, "cannot create filter");
            return ExitCode::FAILURE;
        }
    };
    info!(m = filter.m(), k = filter.k(), "filter ready");

    for item in ["item1", "item2", "item3"] {
        filter.add(item);
    }

    for item in ["item1", "item2", "item3", "item4"] {
        println!("{}", filter.contains(item));
    }

    ExitCode::SUCCESS
}
