//! rpcLens replay probe.
//!
//! Reads hex-encoded connection snapshots line-by-line from stdin, classifies
//! each one, and logs the verdict. Prints the verdict counters on EOF so
//! captures can be replayed against the classifier offline.

use std::io::{self, BufRead};

use tracing_subscriber::{fmt, EnvFilter};

use rpclens_probe::{config, service::ProbeService};

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rpclens.yaml".into());
    let cfg = config::load_from_file(&path).expect("config load failed");
    let service = ProbeService::new(&cfg);

    let stdin = io::stdin();
    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line.expect("stdin read failed");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match hex::decode(line) {
            Ok(snapshot) => {
                // One context per input line; snapshots are independent.
                let verdict = service.observe(line_no as u32, &snapshot);
                tracing::info!(line = line_no + 1, verdict = verdict.as_str(), "replayed");
            }
            Err(err) => {
                tracing::warn!(line = line_no + 1, %err, "skipping non-hex line");
            }
        }
    }

    println!("{}", service.counters().render());
}
