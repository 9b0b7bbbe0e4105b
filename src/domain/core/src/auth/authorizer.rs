// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::*;

use crate::auth::DisjunctivePrivileges;
use crate::{InternalError, Urn};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Evaluates a privilege expression against the policies attached to an
/// actor and a resource
#[async_trait::async_trait]
pub trait Authorizer: Send + Sync {
    async fn is_authorized(
        &self,
        actor: &Urn,
        resource_type: &str,
        resource_urn: &Urn,
        privileges: &DisjunctivePrivileges,
    ) -> Result<bool, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn Authorizer)]
pub struct AlwaysHappyAuthorizer {}

#[async_trait::async_trait]
impl Authorizer for AlwaysHappyAuthorizer {
    async fn is_authorized(
        &self,
        _actor: &Urn,
        _resource_type: &str,
        _resource_urn: &Urn,
        _privileges: &DisjunctivePrivileges,
    ) -> Result<bool, InternalError> {
        Ok(true)
    }
}
