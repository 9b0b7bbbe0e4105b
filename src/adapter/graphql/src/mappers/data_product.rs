// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datacat_core::{self as domain, InternalError, ResultIntoInternal};

use crate::queries::*;
use crate::scalars::EntityKind;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

type AspectMapperFn = fn(&mut DataProduct, &domain::Urn, &serde_json::Value) -> Result<(), InternalError>;

/// Name-keyed dispatch table over the aspects this layer recognizes. Aspects
/// absent from a bundle leave their output field unset, and bundle entries
/// with names outside this table are silently skipped.
const ASPECT_MAPPERS: &[(&str, AspectMapperFn)] = &[
    (domain::DATA_PRODUCT_KEY_ASPECT_NAME, map_key),
    (domain::DATA_PRODUCT_PROPERTIES_ASPECT_NAME, map_properties),
    (domain::OWNERSHIP_ASPECT_NAME, map_ownership),
    (domain::STATUS_ASPECT_NAME, map_status),
    (domain::GLOBAL_TAGS_ASPECT_NAME, map_global_tags),
    (domain::GLOSSARY_TERMS_ASPECT_NAME, map_glossary_terms),
    (domain::DEPRECATION_ASPECT_NAME, map_deprecation),
    (domain::CONTAINER_ASPECT_NAME, map_container),
    (domain::DOMAINS_ASPECT_NAME, map_domains),
];

/// Builds the user-facing entity from a raw aspect bundle. Deterministic and
/// insensitive to the order aspects appear in the bundle.
pub(crate) fn map_data_product(record: &domain::EntityRecord) -> Result<DataProduct, InternalError> {
    let mut data_product = DataProduct::new(record.urn.clone());
    for (aspect_name, mapper) in ASPECT_MAPPERS {
        if let Some(raw) = record.aspects.get_raw(aspect_name) {
            mapper(&mut data_product, &record.urn, raw)?;
        }
    }
    Ok(data_product)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn decode<T: serde::de::DeserializeOwned>(raw: &serde_json::Value) -> Result<T, InternalError> {
    serde_json::from_value(raw.clone()).int_err()
}

fn map_key(
    data_product: &mut DataProduct,
    _urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let key: domain::DataProductKey = decode(raw)?;
    data_product.platform = Some(DataPlatform {
        urn: key.platform.into(),
        entity_type: EntityKind::DataPlatform,
    });
    Ok(())
}

fn map_properties(
    data_product: &mut DataProduct,
    urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let properties: domain::DataProductProperties = decode(raw)?;
    data_product.properties = Some(DataProductProperties {
        name: properties.name,
        description: properties.description,
        custom_properties: properties
            .custom_properties
            .into_iter()
            .map(|(key, value)| CustomPropertiesEntry {
                key,
                value,
                associated_urn: urn.into(),
            })
            .collect(),
    });
    Ok(())
}

fn map_ownership(
    data_product: &mut DataProduct,
    _urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let ownership: domain::Ownership = decode(raw)?;
    data_product.ownership = Some(Ownership {
        owners: ownership
            .owners
            .into_iter()
            .map(|owner| Owner {
                owner: owner.owner.into(),
                owner_type: owner.owner_type.into(),
            })
            .collect(),
        last_modified: ownership.last_modified.map(|stamp| AuditStamp {
            time: stamp.time,
            actor: stamp.actor.into(),
        }),
    });
    Ok(())
}

fn map_status(
    data_product: &mut DataProduct,
    _urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let status: domain::Status = decode(raw)?;
    data_product.status = Some(EntityStatus {
        removed: status.removed,
    });
    Ok(())
}

fn map_global_tags(
    data_product: &mut DataProduct,
    urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let tags: domain::GlobalTags = decode(raw)?;
    data_product.tags = Some(GlobalTags {
        tags: tags
            .tags
            .into_iter()
            .map(|association| TagAssociation {
                tag: association.tag.into(),
                associated_urn: urn.into(),
            })
            .collect(),
    });
    Ok(())
}

fn map_glossary_terms(
    data_product: &mut DataProduct,
    urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let terms: domain::GlossaryTerms = decode(raw)?;
    data_product.glossary_terms = Some(GlossaryTerms {
        terms: terms
            .terms
            .into_iter()
            .map(|association| GlossaryTermAssociation {
                term: association.term.into(),
                associated_urn: urn.into(),
            })
            .collect(),
    });
    Ok(())
}

fn map_deprecation(
    data_product: &mut DataProduct,
    _urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let deprecation: domain::Deprecation = decode(raw)?;
    data_product.deprecation = Some(Deprecation {
        deprecated: deprecation.deprecated,
        note: deprecation.note,
        decommission_time: deprecation.decommission_time,
        actor: deprecation.actor.map(Into::into),
    });
    Ok(())
}

fn map_container(
    data_product: &mut DataProduct,
    _urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let container: domain::Container = decode(raw)?;
    data_product.container = Some(Container {
        urn: container.container.into(),
        entity_type: EntityKind::Container,
    });
    Ok(())
}

/// The stored aspect carries a list, but at most one domain association is
/// exposed per entity
fn map_domains(
    data_product: &mut DataProduct,
    urn: &domain::Urn,
    raw: &serde_json::Value,
) -> Result<(), InternalError> {
    let domains: domain::Domains = decode(raw)?;
    data_product.domain = domains.domains.into_iter().next().map(|domain_urn| {
        DomainAssociation {
            domain: domain_urn.into(),
            associated_urn: urn.into(),
        }
    });
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
