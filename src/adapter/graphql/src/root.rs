// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::mutations::*;
use crate::prelude::*;
use crate::queries::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Query
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Query;

#[Object]
impl Query {
    /// Returns the version of the GQL API
    async fn api_version(&self) -> String {
        "0.1".to_string()
    }

    /// Data-product-related functionality group.
    ///
    /// Data products are the catalog's primary publishable units: named
    /// bundles of data assets owned and curated within a domain.
    async fn data_products(&self) -> DataProducts {
        DataProducts
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Mutation
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Mutation;

#[Object]
impl Mutation {
    /// Data-product-related functionality group
    async fn data_products(&self) -> DataProductsMut {
        DataProductsMut
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type Schema = async_graphql::Schema<Query, Mutation, EmptySubscription>;
pub type SchemaBuilder = async_graphql::SchemaBuilder<Query, Mutation, EmptySubscription>;

/// Returns schema builder without any extensions
pub fn schema_builder() -> SchemaBuilder {
    Schema::build(Query, Mutation, EmptySubscription)
}

/// Returns schema preconfigured with the tracing extension
pub fn schema() -> Schema {
    schema_builder().extension(crate::extensions::Tracing).finish()
}

/// Returns schema without tracing extensions, to avoid polluting test logs
pub fn schema_quiet() -> Schema {
    schema_builder().finish()
}
