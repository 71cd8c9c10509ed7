//! Minimal verdict counters for the probe.
//!
//! No external dependencies are used; plain atomics with a fixed label set,
//! rendered in Prometheus text exposition format.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use rpclens_core::GrpcStatus;

#[derive(Default)]
pub struct VerdictCounters {
    unknown: AtomicU64,
    not_grpc: AtomicU64,
    grpc: AtomicU64,
}

impl VerdictCounters {
    pub fn record(&self, status: GrpcStatus) {
        self.slot(status).fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self, status: GrpcStatus) -> u64 {
        self.slot(status).load(Ordering::Relaxed)
    }

    fn slot(&self, status: GrpcStatus) -> &AtomicU64 {
        match status {
            GrpcStatus::Unknown => &self.unknown,
            GrpcStatus::NotGrpc => &self.not_grpc,
            GrpcStatus::Grpc => &self.grpc,
        }
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# TYPE rpclens_classifications_total counter");
        for status in [GrpcStatus::Unknown, GrpcStatus::NotGrpc, GrpcStatus::Grpc] {
            let _ = writeln!(
                out,
                "rpclens_classifications_total{{verdict=\"{}\"}} {}",
                status.as_str(),
                self.get(status)
            );
        }
        out
    }
}
