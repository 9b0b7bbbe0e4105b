// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{BTreeMap, HashSet};

use datacat_core as domain;
use thiserror::Error;

use super::{BrowsePath, BrowseResults, DataProduct};
use crate::mappers;
use crate::prelude::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const DEFAULT_BROWSE_START: usize = 0;
const DEFAULT_BROWSE_COUNT: usize = 10;

/// Facet fields the browse index understands
const FACET_FIELDS: [&str; 2] = ["origin", "platform"];

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// DataProducts
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DataProducts;

#[Object]
impl DataProducts {
    /// Returns a data product by its urn, or null if the catalog does not
    /// know it
    #[tracing::instrument(level = "info", name = "DataProducts_by_urn", skip_all)]
    async fn by_urn(&self, ctx: &Context<'_>, urn: EntityUrn) -> Result<Option<DataProduct>> {
        let entity_client = from_catalog_n!(ctx, dyn domain::EntityClient);

        let mut data_products =
            load_data_products(entity_client.as_ref(), vec![urn.into()]).await?;
        Ok(data_products.pop().flatten())
    }

    /// Returns data products for a list of urns. The result is aligned 1:1
    /// with the input: duplicates are allowed, order is preserved, and urns
    /// unknown to the catalog yield null entries.
    #[tracing::instrument(level = "info", name = "DataProducts_by_urns", skip_all)]
    async fn by_urns(
        &self,
        ctx: &Context<'_>,
        urns: Vec<EntityUrn>,
    ) -> Result<Vec<Option<DataProduct>>> {
        let entity_client = from_catalog_n!(ctx, dyn domain::EntityClient);

        let urns: Vec<domain::Urn> = urns.into_iter().map(Into::into).collect();
        load_data_products(entity_client.as_ref(), urns).await
    }

    /// Lists data products and sub-groups under a browse path
    #[tracing::instrument(level = "info", name = "DataProducts_browse", skip_all)]
    async fn browse(
        &self,
        ctx: &Context<'_>,
        path: Option<Vec<String>>,
        filters: Option<Vec<FacetFilterInput>>,
        start: Option<usize>,
        count: Option<usize>,
    ) -> Result<BrowseResults> {
        let entity_client = from_catalog_n!(ctx, dyn domain::EntityClient);

        let path = join_browse_path(&path.unwrap_or_default());
        let facet_filters = validate_facet_filters(filters.unwrap_or_default())?;

        let result = entity_client
            .browse(
                domain::DATA_PRODUCT_ENTITY_NAME,
                &path,
                facet_filters,
                start.unwrap_or(DEFAULT_BROWSE_START),
                count.unwrap_or(DEFAULT_BROWSE_COUNT),
            )
            .await
            .map_err(|e| wrap_client_error(e, &[]))?;

        Ok(result.into())
    }

    /// Returns the browse paths a data product is indexed under
    #[tracing::instrument(level = "info", name = "DataProducts_browse_paths", skip_all)]
    async fn browse_paths(&self, ctx: &Context<'_>, urn: EntityUrn) -> Result<Vec<BrowsePath>> {
        let entity_client = from_catalog_n!(ctx, dyn domain::EntityClient);

        let urn: domain::Urn = urn.into();
        let paths = entity_client
            .browse_paths(&urn)
            .await
            .map_err(|e| wrap_client_error(e, std::slice::from_ref(&urn)))?;

        Ok(paths
            .into_iter()
            .map(|path| BrowsePath {
                path: path
                    .split(domain::BROWSE_PATH_DELIMITER)
                    .filter(|segment| !segment.is_empty())
                    .map(String::from)
                    .collect(),
            })
            .collect())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Helpers shared with the mutation side
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Aspects resolved on every data product read
pub(crate) fn aspects_to_resolve() -> HashSet<String> {
    [
        domain::DATA_PRODUCT_KEY_ASPECT_NAME,
        domain::DATA_PRODUCT_PROPERTIES_ASPECT_NAME,
        domain::OWNERSHIP_ASPECT_NAME,
        domain::STATUS_ASPECT_NAME,
        domain::GLOBAL_TAGS_ASPECT_NAME,
        domain::GLOSSARY_TERMS_ASPECT_NAME,
        domain::DEPRECATION_ASPECT_NAME,
        domain::CONTAINER_ASPECT_NAME,
        domain::DOMAINS_ASPECT_NAME,
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Fetches the de-duplicated urn set in one remote call and reconstructs a
/// result list aligned 1:1 with the input list. Urns absent from the remote
/// result map to null entries; a transport failure aborts the whole batch.
pub(crate) async fn load_data_products(
    entity_client: &dyn domain::EntityClient,
    urns: Vec<domain::Urn>,
) -> Result<Vec<Option<DataProduct>>> {
    let unique_urns: HashSet<domain::Urn> = urns.iter().cloned().collect();

    let records = entity_client
        .batch_get(
            domain::DATA_PRODUCT_ENTITY_NAME,
            unique_urns,
            aspects_to_resolve(),
        )
        .await
        .map_err(|e| wrap_client_error(e, &urns))?;

    urns.iter()
        .map(|urn| match records.get(urn) {
            Some(record) => Ok(Some(mappers::map_data_product(record)?)),
            None => Ok(None),
        })
        .collect()
}

/// Transport failures are re-raised generically, but the wrapped cause still
/// names the entities the failed call was about
pub(crate) fn wrap_client_error(e: domain::EntityClientError, urns: &[domain::Urn]) -> GqlError {
    match e {
        domain::EntityClientError::Transport(e) => {
            tracing::error!(error = ?e, ?urns, "Metadata service call failed");
            if urns.is_empty() {
                e.int_err().into()
            } else {
                EntityClientCallError {
                    urns: urns.iter().map(ToString::to_string).collect(),
                    source: e,
                }
                .int_err()
                .into()
            }
        }
        domain::EntityClientError::Internal(e) => e.into(),
    }
}

#[derive(Error, Debug)]
#[error("Metadata service call failed for entities [{}]", .urns.join(", "))]
struct EntityClientCallError {
    urns: Vec<String>,
    #[source]
    source: domain::TransportError,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Joins path segments with the browse delimiter. An empty path addresses
/// the root and maps to an empty string, not the delimiter alone.
fn join_browse_path(segments: &[String]) -> String {
    if segments.is_empty() {
        String::new()
    } else {
        format!(
            "{}{}",
            domain::BROWSE_PATH_DELIMITER,
            segments.join(domain::BROWSE_PATH_DELIMITER)
        )
    }
}

fn validate_facet_filters(
    filters: Vec<FacetFilterInput>,
) -> Result<BTreeMap<String, String>, GqlError> {
    let mut facet_filters = BTreeMap::new();
    for filter in filters {
        if !FACET_FIELDS.contains(&filter.field.as_str()) {
            return Err(GqlError::gql(format!(
                "Unrecognized facet field: {}",
                filter.field
            )));
        }
        facet_filters.insert(filter.field, filter.value);
    }
    Ok(facet_filters)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
