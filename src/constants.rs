use lazy_static::lazy_static;
use std::collections::HashMap;
use std::f64::consts;

lazy_static! {
    pub static ref CONSTANTS: HashMap<&'static str, f64> = vec![
        ("pi", consts::PI),
        ("e", consts::E),
        ("tau", 2.0 * consts::PI),
        ("phi", (1.0 + 5f64.sqrt()) / 2.0),
        ("sqrt2", consts::SQRT_2),
    ]
    .into_iter()
    .collect();
}
