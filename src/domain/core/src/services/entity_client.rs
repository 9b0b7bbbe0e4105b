// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;

use crate::{BoxedError, BrowseResult, ChangeProposal, EntityRecord, InternalError, Urn};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Remote metadata service. Opaque to this layer: calls either succeed or
/// fail as a whole, and no retries are attempted here.
#[async_trait::async_trait]
pub trait EntityClient: Send + Sync {
    /// Returns aspect bundles for the requested entities, restricted to the
    /// requested aspect names. Entities unknown to the service are simply
    /// absent from the result.
    async fn batch_get(
        &self,
        entity_type: &str,
        urns: HashSet<Urn>,
        aspect_names: HashSet<String>,
    ) -> Result<HashMap<Urn, EntityRecord>, EntityClientError>;

    /// Lists entities and sub-groups under a browse path
    async fn browse(
        &self,
        entity_type: &str,
        path: &str,
        facet_filters: BTreeMap<String, String>,
        start: usize,
        count: usize,
    ) -> Result<BrowseResult, EntityClientError>;

    /// Returns the browse paths the entity is indexed under
    async fn browse_paths(&self, urn: &Urn) -> Result<Vec<String>, EntityClientError>;

    /// Hands a batch of change proposals to the service for ingestion
    async fn submit_proposals(
        &self,
        proposals: Vec<ChangeProposal>,
        run_sync: bool,
    ) -> Result<(), EntityClientError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum EntityClientError {
    #[error(transparent)]
    Transport(TransportError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
#[error("Metadata service call failed")]
pub struct TransportError {
    #[source]
    source: BoxedError,
}

impl TransportError {
    pub fn new<E: Into<BoxedError>>(source: E) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl From<TransportError> for EntityClientError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value)
    }
}
