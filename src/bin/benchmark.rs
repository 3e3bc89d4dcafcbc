use arith_env::Environment;
use std::env;
use std::time::Instant;

fn main() {
    let count: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100_000);
    let names: Vec<String> = (0..count).map(|i| format!("var_{}", i)).collect();

    let mut env = Environment::new();
    let start = Instant::now();
    for (i, name) in names.iter().enumerate() {
        env.associate(name, i as f64);
    }
    let associate_duration = start.elapsed();

    let start = Instant::now();
    let sum: f64 = names
        .iter()
        .map(|name| env.get_value(name).expect("bound above"))
        .sum();
    let lookup_duration = start.elapsed();

    println!(
        "count={}, sum={}, associate={}, lookup={}",
        count,
        sum,
        associate_duration.as_secs_f64(),
        lookup_duration.as_secs_f64(),
    );
}
