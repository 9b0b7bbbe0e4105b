// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod data_product_update;
mod entity_kind;
mod entity_urn;
mod facet_filter;
mod ownership_type;

pub(crate) use data_product_update::*;
pub(crate) use entity_kind::*;
pub(crate) use entity_urn::*;
pub(crate) use facet_filter::*;
pub(crate) use ownership_type::*;
