// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{InternalError, ResultIntoInternal, Urn};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Entity and aspect names
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DATA_PRODUCT_ENTITY_NAME: &str = "dataProduct";
pub const CORP_USER_ENTITY_NAME: &str = "corpUser";

pub const DATA_PRODUCT_KEY_ASPECT_NAME: &str = "dataProductKey";
pub const DATA_PRODUCT_PROPERTIES_ASPECT_NAME: &str = "dataProductProperties";
pub const OWNERSHIP_ASPECT_NAME: &str = "ownership";
pub const STATUS_ASPECT_NAME: &str = "status";
pub const GLOBAL_TAGS_ASPECT_NAME: &str = "globalTags";
pub const GLOSSARY_TERMS_ASPECT_NAME: &str = "glossaryTerms";
pub const DEPRECATION_ASPECT_NAME: &str = "deprecation";
pub const CONTAINER_ASPECT_NAME: &str = "container";
pub const DOMAINS_ASPECT_NAME: &str = "domains";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// AspectMap
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Name-keyed collection of raw aspect payloads as returned by the metadata
/// service. Payloads are decoded lazily and individually, so a bundle may
/// carry aspects this layer does not recognize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspectMap(HashMap<String, serde_json::Value>);

impl AspectMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_raw(&self, aspect_name: &str) -> Option<&serde_json::Value> {
        self.0.get(aspect_name)
    }

    /// Decodes the named aspect into its typed form. Absence is not an
    /// error, a present but undecodable payload is.
    pub fn get_as<T: DeserializeOwned>(
        &self,
        aspect_name: &str,
    ) -> Result<Option<T>, InternalError> {
        match self.0.get(aspect_name) {
            None => Ok(None),
            Some(raw) => serde_json::from_value(raw.clone()).map(Some).int_err(),
        }
    }

    pub fn insert<T: Serialize>(
        &mut self,
        aspect_name: impl Into<String>,
        aspect: &T,
    ) -> Result<(), InternalError> {
        let raw = serde_json::to_value(aspect).int_err()?;
        self.0.insert(aspect_name.into(), raw);
        Ok(())
    }

    pub fn contains(&self, aspect_name: &str) -> bool {
        self.0.contains_key(aspect_name)
    }

    pub fn aspect_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Aspect bundle of exactly one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    pub urn: Urn,
    pub aspects: AspectMap,
}

impl EntityRecord {
    pub fn new(urn: Urn) -> Self {
        Self {
            urn,
            aspects: AspectMap::new(),
        }
    }

    pub fn with_aspect<T: Serialize>(
        mut self,
        aspect_name: impl Into<String>,
        aspect: &T,
    ) -> Result<Self, InternalError> {
        self.aspects.insert(aspect_name, aspect)?;
        Ok(self)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Typed aspect payloads
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStamp {
    pub time: DateTime<Utc>,
    pub actor: Urn,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Identity aspect carrying the reference to the parent platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProductKey {
    pub id: String,
    pub platform: Urn,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProductProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_properties: BTreeMap<String, String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipType {
    TechnicalOwner,
    BusinessOwner,
    DataSteward,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub owner: Urn,
    pub owner_type: OwnershipType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ownership {
    pub owners: Vec<Owner>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<AuditStamp>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub removed: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAssociation {
    pub tag: Urn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalTags {
    pub tags: Vec<TagAssociation>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTermAssociation {
    pub term: Urn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTerms {
    pub terms: Vec<GlossaryTermAssociation>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Optional fields use set-if-present semantics: an unset value must not
/// serialize a sentinel into the stored aspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deprecation {
    pub deprecated: bool,
    pub note: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decommission_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Urn>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub container: Urn,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domains {
    pub domains: Vec<Urn>,
}
