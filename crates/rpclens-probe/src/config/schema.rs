use serde::Deserialize;

use rpclens_core::error::{Result, RpcLensError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    pub version: u32,

    #[serde(default)]
    pub probe: ProbeSection,
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RpcLensError::UnsupportedVersion);
        }

        self.probe.validate()?;

        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            probe: ProbeSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeSection {
    /// Largest snapshot one scratch slot must hold.
    #[serde(default = "default_snapshot_max_bytes")]
    pub snapshot_max_bytes: usize,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            snapshot_max_bytes: default_snapshot_max_bytes(),
        }
    }
}

impl ProbeSection {
    pub fn validate(&self) -> Result<()> {
        if !(256..=65536).contains(&self.snapshot_max_bytes) {
            return Err(RpcLensError::Config(
                "probe.snapshot_max_bytes must be between 256 and 65536".into(),
            ));
        }
        Ok(())
    }
}

fn default_snapshot_max_bytes() -> usize {
    4096
}
