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
// BrowseResults
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One page of a browse listing
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct BrowseResults {
    pub entities: Vec<BrowseResultEntity>,
    pub groups: Vec<BrowseResultGroup>,
    pub start: usize,
    pub count: usize,
    pub total: usize,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct BrowseResultEntity {
    pub urn: EntityUrn,
    pub name: Option<String>,
}

/// Sub-path group directly under the browsed path
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct BrowseResultGroup {
    pub name: String,
    pub count: usize,
}

impl From<datacat_core::BrowseResult> for BrowseResults {
    fn from(value: datacat_core::BrowseResult) -> Self {
        Self {
            entities: value
                .entities
                .into_iter()
                .map(|entry| BrowseResultEntity {
                    urn: entry.urn.into(),
                    name: entry.name,
                })
                .collect(),
            groups: value
                .groups
                .into_iter()
                .map(|group| BrowseResultGroup {
                    name: group.name,
                    count: group.count,
                })
                .collect(),
            start: value.start,
            count: value.count,
            total: value.total,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One browse path an entity is indexed under, as an ordered list of segments
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct BrowsePath {
    pub path: Vec<String>,
}
