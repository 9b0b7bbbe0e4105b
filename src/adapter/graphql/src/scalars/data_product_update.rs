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
// DataProductUpdateInput
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Partial update of a data product. Only the facets that are present are
/// written, the rest of the entity is left untouched.
#[derive(InputObject, Debug, Clone)]
pub struct DataProductUpdateInput {
    pub ownership: Option<OwnershipUpdateInput>,
    pub deprecation: Option<DeprecationUpdateInput>,
    pub tags: Option<GlobalTagsUpdateInput>,
}

#[derive(InputObject, Debug, Clone)]
pub struct OwnershipUpdateInput {
    pub owners: Vec<OwnerUpdateInput>,
}

#[derive(InputObject, Debug, Clone)]
pub struct OwnerUpdateInput {
    pub owner: EntityUrn,
    pub owner_type: OwnershipType,
}

#[derive(InputObject, Debug, Clone)]
pub struct DeprecationUpdateInput {
    pub deprecated: bool,
    pub note: String,
    pub decommission_time: Option<chrono::DateTime<chrono::Utc>>,
}

/// Replaces the full tag set of the entity. An empty list clears all tags.
#[derive(InputObject, Debug, Clone)]
pub struct GlobalTagsUpdateInput {
    pub tags: Vec<TagAssociationInput>,
}

#[derive(InputObject, Debug, Clone)]
pub struct TagAssociationInput {
    pub tag: EntityUrn,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// BatchDataProductUpdateInput
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(InputObject, Debug, Clone)]
pub struct BatchDataProductUpdateInput {
    pub urn: EntityUrn,
    pub update: DataProductUpdateInput,
}
