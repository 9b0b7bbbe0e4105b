// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::prelude::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Type tag attached to entity references that are exposed as typed objects.
/// Tag, term, and domain associations carry bare urns instead and need no
/// variant here.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    DataProduct,
    DataPlatform,
    Container,
}
