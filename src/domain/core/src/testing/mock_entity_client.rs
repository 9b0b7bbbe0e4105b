// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{
    BrowseResult,
    ChangeProposal,
    EntityClient,
    EntityClientError,
    EntityRecord,
    Urn,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub EntityClient {}

    #[async_trait::async_trait]
    impl EntityClient for EntityClient {
        async fn batch_get(
            &self,
            entity_type: &str,
            urns: HashSet<Urn>,
            aspect_names: HashSet<String>,
        ) -> Result<HashMap<Urn, EntityRecord>, EntityClientError>;

        async fn browse(
            &self,
            entity_type: &str,
            path: &str,
            facet_filters: BTreeMap<String, String>,
            start: usize,
            count: usize,
        ) -> Result<BrowseResult, EntityClientError>;

        async fn browse_paths(&self, urn: &Urn) -> Result<Vec<String>, EntityClientError>;

        async fn submit_proposals(
            &self,
            proposals: Vec<ChangeProposal>,
            run_sync: bool,
        ) -> Result<(), EntityClientError>;
    }
}
