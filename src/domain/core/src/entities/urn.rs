// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Structured identifier of one catalog entity: `urn:dc:<entityType>:<key>`.
///
/// The key part is opaque to this layer and may itself contain colons.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Urn {
    entity_type: String,
    key: String,
}

impl Urn {
    pub const SCHEME: &'static str = "urn";
    pub const NAMESPACE: &'static str = "dc";

    pub fn new(entity_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            key: key.into(),
        }
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for Urn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            Self::SCHEME,
            Self::NAMESPACE,
            self.entity_type,
            self.key
        )
    }
}

impl FromStr for Urn {
    type Err = UrnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || UrnParseError { urn: s.to_string() };

        let mut parts = s.splitn(4, ':');
        let scheme = parts.next().ok_or_else(malformed)?;
        let namespace = parts.next().ok_or_else(malformed)?;
        let entity_type = parts.next().ok_or_else(malformed)?;
        let key = parts.next().ok_or_else(malformed)?;

        if scheme != Self::SCHEME
            || namespace != Self::NAMESPACE
            || entity_type.is_empty()
            || key.is_empty()
        {
            return Err(malformed());
        }

        Ok(Self::new(entity_type, key))
    }
}

impl TryFrom<String> for Urn {
    type Error = UrnParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Urn> for String {
    fn from(value: Urn) -> Self {
        value.to_string()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid urn: {urn}")]
pub struct UrnParseError {
    pub urn: String,
}
