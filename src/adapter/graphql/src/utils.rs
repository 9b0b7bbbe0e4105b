// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datacat_core::auth::CurrentActorSubject;
use datacat_core::{AccessError, InternalError, Urn};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves one or more components from the DI catalog attached to the
/// request context
macro_rules! from_catalog_n {
    ($gql_ctx:ident, $T:ty) => {{
        let catalog = $gql_ctx.data::<dill::Catalog>().unwrap();
        catalog.get_one::<$T>().int_err()?
    }};
    ($gql_ctx:ident, $T:ty, $($Ts:ty),+ $(,)?) => {{
        let catalog = $gql_ctx.data::<dill::Catalog>().unwrap();
        (
            catalog.get_one::<$T>().int_err()?,
            $(catalog.get_one::<$Ts>().int_err()?),+
        )
    }};
}

pub(crate) use from_catalog_n;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Returns the urn of the logged-in actor, or an access error for anonymous
/// callers that slipped past the guard
pub(crate) fn logged_actor_urn(subject: &CurrentActorSubject) -> Result<&Urn, GqlError> {
    match subject {
        CurrentActorSubject::Logged(actor) => Ok(&actor.actor_urn),
        CurrentActorSubject::Anonymous => Err(GqlError::Access(AccessError::Unauthenticated(
            crate::ANONYMOUS_ACCESS_FORBIDDEN_MESSAGE.into(),
        ))),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// GqlError
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Error type for resolvers. Only the `Gql` variant surfaces its message to
/// API clients verbatim, the other two are logged by the tracing extension
/// and rendered generically.
#[derive(Debug)]
pub enum GqlError {
    Internal(InternalError),
    Access(AccessError),
    Gql(async_graphql::Error),
}

impl GqlError {
    pub fn gql(message: impl Into<String>) -> Self {
        Self::Gql(async_graphql::Error::new(message))
    }
}

impl From<InternalError> for GqlError {
    fn from(value: InternalError) -> Self {
        Self::Internal(value)
    }
}

impl From<AccessError> for GqlError {
    fn from(value: AccessError) -> Self {
        Self::Access(value)
    }
}

impl From<async_graphql::Error> for GqlError {
    fn from(value: async_graphql::Error) -> Self {
        Self::Gql(value)
    }
}

impl From<GqlError> for async_graphql::Error {
    fn from(value: GqlError) -> Self {
        match value {
            GqlError::Internal(e) => async_graphql::Error::new_with_source(e),
            GqlError::Access(e) => async_graphql::Error::new_with_source(e),
            GqlError::Gql(e) => e,
        }
    }
}
