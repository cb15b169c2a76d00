//! Platform identity as reported by the native service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::BridgeError;

/// Operating system feature level, compared as `major.minor`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeatureLevel {
    pub major: u16,
    pub minor: u16,
}

impl FeatureLevel {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for FeatureLevel {
    type Err = BridgeError;

    /// Accepts `14`, `14.2` and `14.2.1`; the patch component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let parse = |part: Option<&str>| -> Result<u16, BridgeError> {
            match part {
                None => Ok(0),
                Some(p) => p
                    .parse::<u16>()
                    .map_err(|_| BridgeError::invalid(format!("bad feature level `{s}`"))),
            }
        };

        let major = match parts.next() {
            Some(p) if !p.is_empty() => parse(Some(p))?,
            _ => return Err(BridgeError::invalid("empty feature level")),
        };
        let minor = parse(parts.next())?;
        Ok(Self { major, minor })
    }
}

impl TryFrom<String> for FeatureLevel {
    type Error = BridgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FeatureLevel> for String {
    fn from(value: FeatureLevel) -> Self {
        value.to_string()
    }
}

/// Operating system family the bridge runs on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlatformFamily {
    Ios,
    TvOs,
    MacOs,
}

impl PlatformFamily {
    /// Leaderboard artwork is never offered on tvOS, whatever the version.
    pub fn supports_leaderboard_images(&self) -> bool {
        !matches!(self, PlatformFamily::TvOs)
    }
}

/// Family plus feature level of the running platform.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PlatformVersion {
    pub family: PlatformFamily,
    pub level: FeatureLevel,
}

impl PlatformVersion {
    pub const fn new(family: PlatformFamily, level: FeatureLevel) -> Self {
        Self { family, level }
    }

    /// Report at most `cap`, leaving the version untouched when no cap is set.
    pub fn capped(self, cap: Option<FeatureLevel>) -> Self {
        match cap {
            Some(cap) if cap < self.level => Self {
                family: self.family,
                level: cap,
            },
            _ => self,
        }
    }
}
