//! JSON test vector loader shared by the classifier tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub snapshot: SnapshotData,
    pub expect: ExpectVerdict,
}

#[derive(Debug, Deserialize)]
pub struct ExpectVerdict {
    pub verdict: String,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotData {
    pub encoding: String,
    pub data: String,
}

impl SnapshotData {
    pub fn decode(&self) -> Vec<u8> {
        match self.encoding.as_str() {
            "base64" => base64::decode(&self.data).expect("invalid base64 in test vector"),
            "hex" => hex::decode(&self.data).expect("invalid hex in test vector"),
            other => panic!("unsupported encoding: {other}"),
        }
    }
}
