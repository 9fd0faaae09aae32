//! Declared SDKs and accepted licenses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An SDK a project may declare in `satox_sdks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sdk {
    SatoxSdk,
    SatoxGameSdk,
    SatoxMobileSdk,
}

impl Sdk {
    pub const ALL: [Sdk; 3] = [Self::SatoxSdk, Self::SatoxGameSdk, Self::SatoxMobileSdk];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SatoxSdk => "satox-sdk",
            Self::SatoxGameSdk => "satox-game-sdk",
            Self::SatoxMobileSdk => "satox-mobile-sdk",
        }
    }
}

impl fmt::Display for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sdk {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sdk| sdk.as_str() == s)
            .ok_or_else(|| format!("unknown SDK: {s}"))
    }
}

/// SPDX identifiers accepted for showcase projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum License {
    Mit,
    Apache2,
    Gpl3,
    Bsd3Clause,
    Isc,
    Unlicense,
    Cc0,
    CcBy4,
    CcBySa4,
    CcByNc4,
}

impl License {
    pub const ALL: [License; 10] = [
        Self::Mit,
        Self::Apache2,
        Self::Gpl3,
        Self::Bsd3Clause,
        Self::Isc,
        Self::Unlicense,
        Self::Cc0,
        Self::CcBy4,
        Self::CcBySa4,
        Self::CcByNc4,
    ];

    pub fn spdx(self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPL-3.0",
            Self::Bsd3Clause => "BSD-3-Clause",
            Self::Isc => "ISC",
            Self::Unlicense => "Unlicense",
            Self::Cc0 => "CC0-1.0",
            Self::CcBy4 => "CC-BY-4.0",
            Self::CcBySa4 => "CC-BY-SA-4.0",
            Self::CcByNc4 => "CC-BY-NC-4.0",
        }
    }

    pub fn from_spdx(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.spdx() == id)
    }
}
