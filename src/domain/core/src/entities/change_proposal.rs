// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{AuditStamp, InternalError, ResultIntoInternal, Urn};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    Upsert,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Outbound instruction to set one aspect of one entity to a new value.
/// Proposals are independent of each other; ordering and atomicity across a
/// submitted batch are the metadata service's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeProposal {
    /// Target entity, stamped by the caller before submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_urn: Option<Urn>,

    pub entity_type: String,
    pub aspect_name: String,
    pub change_type: ChangeType,
    pub aspect: serde_json::Value,
    pub audit: AuditStamp,
}

impl ChangeProposal {
    pub fn upsert<T: Serialize>(
        entity_type: &str,
        aspect_name: &str,
        aspect: &T,
        audit: AuditStamp,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            entity_urn: None,
            entity_type: entity_type.to_string(),
            aspect_name: aspect_name.to_string(),
            change_type: ChangeType::Upsert,
            aspect: serde_json::to_value(aspect).int_err()?,
            audit,
        })
    }

    pub fn decode_aspect<T: DeserializeOwned>(&self) -> Result<T, InternalError> {
        serde_json::from_value(self.aspect.clone()).int_err()
    }
}
