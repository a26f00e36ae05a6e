use anyhow::Context;
use std::io::Write;
use stride_primes::{count_primes, StrideRange};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::format()
        .compact()
        .with_source_location(true);
    // stdout carries the answer only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .event_format(format)
        .init();

    let primes = count_primes(StrideRange::default());
    tracing::debug!(primes, "done");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", primes).context("writing result to stdout")?;
    stdout.flush().context("flushing stdout")?;

    Ok(())
}
