// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::Utc;
use datacat_core::auth::{Authorizer, CurrentActorSubject};
use datacat_core::{self as domain};

use crate::LoggedInGuard;
use crate::mappers;
use crate::prelude::*;
use crate::queries::{DataProduct, load_data_products, wrap_client_error};
use crate::utils::logged_actor_urn;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const UNAUTHORIZED_ACTION_MESSAGE: &str =
    "Unauthorized to perform this action. Please contact your DataCat administrator.";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// DataProductsMut
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DataProductsMut;

#[Object]
impl DataProductsMut {
    /// Applies a partial update to a data product and returns the freshly
    /// re-read entity, reflecting whatever the metadata service actually
    /// persisted
    #[graphql(guard = "LoggedInGuard::new()")]
    #[tracing::instrument(level = "info", name = "DataProductsMut_update", skip_all)]
    async fn update(
        &self,
        ctx: &Context<'_>,
        urn: EntityUrn,
        input: DataProductUpdateInput,
    ) -> Result<DataProduct> {
        let mut updated = update_data_products(ctx, vec![(urn.into(), input)]).await?;
        // One input item always yields one output item
        updated.pop().ok_or_else(|| {
            GqlError::Internal(InternalError::reason("Update produced no result"))
        })
    }

    /// Applies partial updates to multiple data products. Authorization is
    /// checked for every item before anything is written: if any item is
    /// unauthorized the whole call fails and no update is ingested.
    #[graphql(guard = "LoggedInGuard::new()")]
    #[tracing::instrument(level = "info", name = "DataProductsMut_batch_update", skip_all)]
    async fn batch_update(
        &self,
        ctx: &Context<'_>,
        updates: Vec<BatchDataProductUpdateInput>,
    ) -> Result<Vec<DataProduct>> {
        let updates = updates
            .into_iter()
            .map(|item| (item.urn.into(), item.update))
            .collect();
        update_data_products(ctx, updates).await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Shared pipeline for single and batch updates: authorize every item, build
/// and stamp proposals, submit them as one batch, then re-read the entities
async fn update_data_products(
    ctx: &Context<'_>,
    updates: Vec<(domain::Urn, DataProductUpdateInput)>,
) -> Result<Vec<DataProduct>> {
    let (entity_client, authorizer, subject) = from_catalog_n!(
        ctx,
        dyn domain::EntityClient,
        dyn Authorizer,
        CurrentActorSubject
    );

    let actor = logged_actor_urn(&subject)?.clone();

    // No side effect may leak when any item is unauthorized
    for (urn, input) in &updates {
        let privileges = mappers::required_update_privileges(input);
        let authorized = authorizer
            .is_authorized(&actor, domain::DATA_PRODUCT_ENTITY_NAME, urn, &privileges)
            .await?;
        if !authorized {
            tracing::warn!(%urn, %actor, "Unauthorized data product update");
            return Err(GqlError::gql(UNAUTHORIZED_ACTION_MESSAGE));
        }
    }

    let now = Utc::now();
    let mut proposals = Vec::new();
    for (urn, input) in &updates {
        let mut item_proposals = mappers::map_update_input(input, &actor, now)?;
        for proposal in &mut item_proposals {
            proposal.entity_urn = Some(urn.clone());
        }
        proposals.append(&mut item_proposals);
    }

    let urns: Vec<domain::Urn> = updates.into_iter().map(|(urn, _)| urn).collect();

    entity_client
        .submit_proposals(proposals, false)
        .await
        .map_err(|e| wrap_client_error(e, &urns))?;

    let data_products = load_data_products(entity_client.as_ref(), urns).await?;
    data_products
        .into_iter()
        .map(|data_product| {
            data_product.ok_or_else(|| {
                GqlError::Internal(InternalError::reason("Entity missing after update"))
            })
        })
        .collect()
}
