// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use datacat_core::auth::{ConjunctivePrivileges, DisjunctivePrivileges, Privilege};
use datacat_core::{self as domain, InternalError};

use crate::scalars::DataProductUpdateInput;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Translates a sparse update input into one change proposal per facet
/// present in the input. Facets absent from the input produce no proposal
/// and leave the stored aspect untouched.
///
/// Proposals are built without a target urn; the caller stamps it before
/// submission, which lets single and batch update paths share this mapper.
pub(crate) fn map_update_input(
    input: &DataProductUpdateInput,
    actor: &domain::Urn,
    now: DateTime<Utc>,
) -> Result<Vec<domain::ChangeProposal>, InternalError> {
    let audit = domain::AuditStamp {
        time: now,
        actor: actor.clone(),
    };

    let mut proposals = Vec::new();

    if let Some(ownership) = &input.ownership {
        let aspect = domain::Ownership {
            owners: ownership
                .owners
                .iter()
                .map(|owner| domain::Owner {
                    owner: owner.owner.clone().into(),
                    owner_type: owner.owner_type.into(),
                })
                .collect(),
            last_modified: Some(audit.clone()),
        };
        proposals.push(domain::ChangeProposal::upsert(
            domain::DATA_PRODUCT_ENTITY_NAME,
            domain::OWNERSHIP_ASPECT_NAME,
            &aspect,
            audit.clone(),
        )?);
    }

    if let Some(deprecation) = &input.deprecation {
        // Set-if-present: an unset decommission time must not serialize a
        // sentinel into the stored aspect
        let aspect = domain::Deprecation {
            deprecated: deprecation.deprecated,
            note: deprecation.note.clone(),
            decommission_time: deprecation.decommission_time,
            actor: Some(actor.clone()),
        };
        proposals.push(domain::ChangeProposal::upsert(
            domain::DATA_PRODUCT_ENTITY_NAME,
            domain::DEPRECATION_ASPECT_NAME,
            &aspect,
            audit.clone(),
        )?);
    }

    if let Some(tags) = &input.tags {
        // An empty input list still produces a proposal, clearing all tags
        let aspect = domain::GlobalTags {
            tags: tags
                .tags
                .iter()
                .map(|association| domain::TagAssociation {
                    tag: association.tag.clone().into(),
                })
                .collect(),
        };
        proposals.push(domain::ChangeProposal::upsert(
            domain::DATA_PRODUCT_ENTITY_NAME,
            domain::GLOBAL_TAGS_ASPECT_NAME,
            &aspect,
            audit.clone(),
        )?);
    }

    Ok(proposals)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves the privilege expression an update must satisfy: the generic
/// edit-entity privilege alone is always sufficient, or the caller may hold
/// every privilege the present facets specifically require. An input with no
/// facets needing a specific privilege makes the second alternative
/// vacuously satisfiable.
pub(crate) fn required_update_privileges(input: &DataProductUpdateInput) -> DisjunctivePrivileges {
    let mut specific = Vec::new();
    if input.ownership.is_some() {
        specific.push(Privilege::EditOwners);
    }
    if input.deprecation.is_some() {
        specific.push(Privilege::EditStatus);
    }

    DisjunctivePrivileges::new(vec![
        ConjunctivePrivileges::new(vec![Privilege::EditEntity]),
        ConjunctivePrivileges::new(specific),
    ])
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
