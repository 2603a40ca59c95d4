use anyhow::{Context, Result};
use guest::{fib_series, is_exact, MAX_EXACT_TERMS};
use serde::Serialize;
use std::env::VarError;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, warn};

#[derive(Serialize)]
struct Stats {
    program: &'static str,
    n: i64,
    terms: usize,
    exact: bool,
    generate_secs: f32,
}

fn env_or<T: FromStr>(var: &str, def: T) -> Result<T>
where
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(var) {
        Ok(s) => s
            .parse::<T>()
            .with_context(|| format!("Could not parse {var}={s:?}")),
        Err(VarError::NotPresent) => Ok(def),
        Err(err) => Err(err).with_context(|| format!("Could not read {var}")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let n = env_or("FIB_ARG", 4i64)?;
    let emit_stats = env_or("FIB_STATS", false)?;
    debug!(n, emit_stats, "resolved configuration");

    if !is_exact(n) {
        warn!(n, max = MAX_EXACT_TERMS, "terms past F(93) wrap at 64 bits");
    }

    let it = Instant::now();
    let series = fib_series(n);
    let generate_secs = it.elapsed().as_secs_f32();

    println!("{series:?}");

    if emit_stats {
        let stats = Stats {
            program: "fib-series",
            n,
            terms: series.len(),
            exact: is_exact(n),
            generate_secs,
        };
        eprintln!("{}", serde_json::to_string(&stats)?);
    }

    Ok(())
}
