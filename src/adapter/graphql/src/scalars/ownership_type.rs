// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::prelude::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipType {
    TechnicalOwner,
    BusinessOwner,
    DataSteward,
}

impl From<datacat_core::OwnershipType> for OwnershipType {
    fn from(value: datacat_core::OwnershipType) -> Self {
        match value {
            datacat_core::OwnershipType::TechnicalOwner => Self::TechnicalOwner,
            datacat_core::OwnershipType::BusinessOwner => Self::BusinessOwner,
            datacat_core::OwnershipType::DataSteward => Self::DataSteward,
        }
    }
}

impl From<OwnershipType> for datacat_core::OwnershipType {
    fn from(value: OwnershipType) -> Self {
        match value {
            OwnershipType::TechnicalOwner => Self::TechnicalOwner,
            OwnershipType::BusinessOwner => Self::BusinessOwner,
            OwnershipType::DataSteward => Self::DataSteward,
        }
    }
}
