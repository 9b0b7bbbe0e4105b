// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::ops::Deref;

use crate::prelude::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// EntityUrn
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityUrn(datacat_core::Urn);

impl From<datacat_core::Urn> for EntityUrn {
    fn from(value: datacat_core::Urn) -> Self {
        Self(value)
    }
}

impl From<&datacat_core::Urn> for EntityUrn {
    fn from(value: &datacat_core::Urn) -> Self {
        Self(value.clone())
    }
}

impl From<EntityUrn> for datacat_core::Urn {
    fn from(value: EntityUrn) -> Self {
        value.0
    }
}

impl Deref for EntityUrn {
    type Target = datacat_core::Urn;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for EntityUrn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Malformed urns are rejected at the API boundary, before any remote call
/// is attempted
#[Scalar]
impl ScalarType for EntityUrn {
    fn parse(value: Value) -> InputValueResult<Self> {
        if let Value::String(value) = &value {
            let urn: datacat_core::Urn = value.as_str().parse()?;
            Ok(urn.into())
        } else {
            Err(InputValueError::expected_type(value))
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}
