// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::prelude::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// DataProduct
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// User-facing projection of a data product entity. Fields are populated
/// independently from the aspect bundle the metadata service returned, so
/// any of them may be absent without the entity as a whole being invalid.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct DataProduct {
    /// Unique identifier of the data product
    pub urn: EntityUrn,

    /// Fixed entity type tag
    pub entity_type: EntityKind,

    /// Platform the data product is materialized on
    pub platform: Option<DataPlatform>,

    /// Display properties such as name and description
    pub properties: Option<DataProductProperties>,

    /// Ownership assignments
    pub ownership: Option<Ownership>,

    /// Soft-delete status
    pub status: Option<EntityStatus>,

    /// Tags attached to the data product
    pub tags: Option<GlobalTags>,

    /// Glossary terms attached to the data product
    pub glossary_terms: Option<GlossaryTerms>,

    /// Deprecation notice, if the data product was deprecated
    pub deprecation: Option<Deprecation>,

    /// Parent container
    pub container: Option<Container>,

    /// Domain the data product belongs to
    pub domain: Option<DomainAssociation>,
}

impl DataProduct {
    pub fn new(urn: datacat_core::Urn) -> Self {
        Self {
            urn: urn.into(),
            entity_type: EntityKind::DataProduct,
            platform: None,
            properties: None,
            ownership: None,
            status: None,
            tags: None,
            glossary_terms: None,
            deprecation: None,
            container: None,
            domain: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reference to the platform an entity is materialized on
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct DataPlatform {
    pub urn: EntityUrn,
    pub entity_type: EntityKind,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct DataProductProperties {
    pub name: Option<String>,
    pub description: Option<String>,
    pub custom_properties: Vec<CustomPropertiesEntry>,
}

/// One custom property, annotated with the entity it was read from
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct CustomPropertiesEntry {
    pub key: String,
    pub value: String,
    pub associated_urn: EntityUrn,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct Ownership {
    pub owners: Vec<Owner>,
    pub last_modified: Option<AuditStamp>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub owner: EntityUrn,
    pub owner_type: OwnershipType,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub time: DateTime<Utc>,
    pub actor: EntityUrn,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(SimpleObject, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityStatus {
    pub removed: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct GlobalTags {
    pub tags: Vec<TagAssociation>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct TagAssociation {
    pub tag: EntityUrn,
    pub associated_urn: EntityUrn,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct GlossaryTerms {
    pub terms: Vec<GlossaryTermAssociation>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct GlossaryTermAssociation {
    pub term: EntityUrn,
    pub associated_urn: EntityUrn,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    pub deprecated: bool,
    pub note: String,
    pub decommission_time: Option<DateTime<Utc>>,
    pub actor: Option<EntityUrn>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub urn: EntityUrn,
    pub entity_type: EntityKind,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Directed association between an entity and its domain
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct DomainAssociation {
    pub domain: EntityUrn,
    pub associated_urn: EntityUrn,
}
