use arith_env::{repl, Environment};
use std::env;

/// Installs a `tracing` subscriber, but only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    println!("Variables: `name = number` binds, `name` looks up, `env` lists.");
    let mut env = if env::var("ARITH_ENV_CONSTANTS").is_ok() {
        Environment::with_constants()
    } else {
        Environment::new()
    };
    repl::start(&mut env)
}
