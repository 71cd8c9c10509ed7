//! Top-level facade crate for rpcLens.
//!
//! Re-exports the classifier core and the probe library so users can depend
//! on a single crate.

pub mod core {
    pub use rpclens_core::*;
}

pub mod probe {
    pub use rpclens_probe::*;
}
