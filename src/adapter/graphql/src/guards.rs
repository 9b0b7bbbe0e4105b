// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::{Context, Guard, Result};
use datacat_core::ResultIntoInternal;
use datacat_core::auth::CurrentActorSubject;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ANONYMOUS_ACCESS_FORBIDDEN_MESSAGE: &str = "Anonymous access forbidden";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct LoggedInGuard {}

impl LoggedInGuard {
    pub fn new() -> Self {
        Self {}
    }
}

impl Guard for LoggedInGuard {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        let catalog = ctx.data::<dill::Catalog>()?;
        let current_actor_subject = catalog.get_one::<CurrentActorSubject>().int_err()?;

        if let CurrentActorSubject::Anonymous = current_actor_subject.as_ref() {
            Err(async_graphql::Error::new(
                ANONYMOUS_ACCESS_FORBIDDEN_MESSAGE,
            ))
        } else {
            Ok(())
        }
    }
}
