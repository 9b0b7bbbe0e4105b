// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use crate::auth::{Authorizer, DisjunctivePrivileges, Privilege};
use crate::{InternalError, Urn};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Authorizer that evaluates privilege expressions against a fixed set of
/// granted privileges, ignoring the actor and the resource
#[derive(Debug, Clone)]
pub struct StaticPrivilegeAuthorizer {
    granted: HashSet<Privilege>,
}

impl StaticPrivilegeAuthorizer {
    pub fn new<I>(granted: I) -> Self
    where
        I: IntoIterator<Item = Privilege>,
    {
        Self {
            granted: granted.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Authorizer for StaticPrivilegeAuthorizer {
    async fn is_authorized(
        &self,
        _actor: &Urn,
        _resource_type: &str,
        _resource_urn: &Urn,
        privileges: &DisjunctivePrivileges,
    ) -> Result<bool, InternalError> {
        Ok(privileges.is_satisfied_by(&self.granted))
    }
}
