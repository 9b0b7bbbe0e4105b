// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::Urn;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Identity of the caller on whose behalf the current request executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentActorSubject {
    Anonymous,
    Logged(LoggedActor),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedActor {
    pub actor_urn: Urn,
}

impl CurrentActorSubject {
    pub fn logged(actor_urn: Urn) -> Self {
        Self::Logged(LoggedActor { actor_urn })
    }

    pub fn anonymous() -> Self {
        Self::Anonymous
    }
}
