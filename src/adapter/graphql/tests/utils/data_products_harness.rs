// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datacat_core as domain;
use datacat_core::auth::{Authorizer, CurrentActorSubject, Privilege};
use datacat_core::testing::{MockEntityClient, StaticPrivilegeAuthorizer};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) struct GraphQLDataProductsHarness {
    catalog: dill::Catalog,
}

impl GraphQLDataProductsHarness {
    /// Harness for a logged-in caller holding the generic edit privilege
    pub fn new(entity_client: MockEntityClient) -> Self {
        Self::with_auth(
            entity_client,
            [Privilege::EditEntity],
            CurrentActorSubject::logged(actor_urn()),
        )
    }

    pub fn with_auth(
        entity_client: MockEntityClient,
        granted: impl IntoIterator<Item = Privilege>,
        subject: CurrentActorSubject,
    ) -> Self {
        let catalog = dill::CatalogBuilder::new()
            .add_value(entity_client)
            .bind::<dyn domain::EntityClient, MockEntityClient>()
            .add_value(StaticPrivilegeAuthorizer::new(granted))
            .bind::<dyn Authorizer, StaticPrivilegeAuthorizer>()
            .add_value(subject)
            .build();

        Self { catalog }
    }

    pub async fn execute_query(&self, query: impl Into<String>) -> async_graphql::Response {
        datacat_adapter_graphql::schema_quiet()
            .execute(async_graphql::Request::new(query).data(self.catalog.clone()))
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn actor_urn() -> domain::Urn {
    "urn:dc:corpUser:alice".parse().unwrap()
}

pub(crate) fn data_product_urn(id: &str) -> domain::Urn {
    format!("urn:dc:dataProduct:{id}").parse().unwrap()
}

pub(crate) fn data_product_record(id: &str, name: &str) -> domain::EntityRecord {
    domain::EntityRecord::new(data_product_urn(id))
        .with_aspect(
            domain::DATA_PRODUCT_PROPERTIES_ASPECT_NAME,
            &domain::DataProductProperties {
                name: Some(name.to_string()),
                description: None,
                custom_properties: Default::default(),
            },
        )
        .unwrap()
}
