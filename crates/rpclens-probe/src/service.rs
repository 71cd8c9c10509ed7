//! The probe service: scratch acquire → classify → count → trace.

use rpclens_core::{GrpcClassifier, GrpcStatus};

use crate::config::ProbeConfig;
use crate::obs::VerdictCounters;
use crate::scratch::ScratchPool;

/// Owns one classifier, one scratch pool, and the verdict counters.
///
/// Safe to share across threads; each execution context gets its own scratch
/// slot and the classifier itself is stateless.
pub struct ProbeService {
    classifier: GrpcClassifier,
    scratch: ScratchPool,
    counters: VerdictCounters,
}

impl ProbeService {
    pub fn new(cfg: &ProbeConfig) -> Self {
        Self {
            classifier: GrpcClassifier::new(),
            scratch: ScratchPool::new(cfg.probe.snapshot_max_bytes),
            counters: VerdictCounters::default(),
        }
    }

    /// Classify one observed snapshot for the given execution context.
    ///
    /// Infrastructure failures (snapshot larger than a scratch slot) fail
    /// closed to `Unknown`, same as inconclusive traffic.
    pub fn observe(&self, ctx_id: u32, snapshot: &[u8]) -> GrpcStatus {
        let status = match self
            .scratch
            .with_slot(ctx_id, snapshot, |bytes| self.classifier.classify(bytes))
        {
            Ok(status) => status,
            Err(err) => {
                tracing::debug!(%err, ctx_id, "snapshot rejected by scratch pool");
                GrpcStatus::Unknown
            }
        };

        self.counters.record(status);
        tracing::debug!(
            ctx_id,
            len = snapshot.len(),
            verdict = status.as_str(),
            "connection snapshot classified"
        );
        status
    }

    pub fn counters(&self) -> &VerdictCounters {
        &self.counters
    }
}
