// Distributed under The MIT License (MIT)
//
// Copyright (c) 2024 The `image-rs` developers
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How samples outside of the 8-bit range are packed into legacy pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OverflowPolicy {
    /// Truncate toward zero and keep the low eight bits, so `300` becomes `44`.
    ///
    /// This is what legacy images have always done with foreign data.
    #[default]
    Wrap,
    /// Fail with [`HarmonyError::ValueOutOfRange`](crate::HarmonyError::ValueOutOfRange).
    Reject,
}

/// Tunables of the harmonizers.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarmonizerOptions {
    pub overflow: OverflowPolicy,
}

impl HarmonizerOptions {
    pub fn with_overflow(self, overflow: OverflowPolicy) -> Self {
        HarmonizerOptions { overflow, ..self }
    }
}
