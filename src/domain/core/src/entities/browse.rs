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

pub const BROWSE_PATH_DELIMITER: &str = "/";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One page of a browse listing as produced by the browse index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseResult {
    pub entities: Vec<BrowseEntry>,
    pub groups: Vec<BrowseGroup>,
    pub start: usize,
    pub count: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseEntry {
    pub urn: Urn,
    pub name: Option<String>,
}

/// Sub-path group under the browsed path with the number of entities below it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseGroup {
    pub name: String,
    pub count: usize,
}
