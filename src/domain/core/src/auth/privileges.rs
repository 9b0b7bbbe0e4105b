// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;
use std::str::FromStr;

use crate::{ErrorIntoInternal, InternalError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privilege {
    EditEntity,
    EditOwners,
    EditStatus,
    EditTags,
}

impl Privilege {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privilege::EditEntity => "EDIT_ENTITY",
            Privilege::EditOwners => "EDIT_ENTITY_OWNERS",
            Privilege::EditStatus => "EDIT_ENTITY_STATUS",
            Privilege::EditTags => "EDIT_ENTITY_TAGS",
        }
    }
}

impl FromStr for Privilege {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EDIT_ENTITY" => Ok(Privilege::EditEntity),
            "EDIT_ENTITY_OWNERS" => Ok(Privilege::EditOwners),
            "EDIT_ENTITY_STATUS" => Ok(Privilege::EditStatus),
            "EDIT_ENTITY_TAGS" => Ok(Privilege::EditTags),
            _ => Err(format!("Invalid privilege: {s}").int_err()),
        }
    }
}

impl std::fmt::Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Satisfied when the caller holds every member privilege. An empty
/// conjunction is vacuously satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjunctivePrivileges(Vec<Privilege>);

impl ConjunctivePrivileges {
    pub fn new(privileges: Vec<Privilege>) -> Self {
        Self(privileges)
    }

    pub fn privileges(&self) -> &[Privilege] {
        &self.0
    }

    pub fn is_satisfied_by(&self, held: &HashSet<Privilege>) -> bool {
        self.0.iter().all(|privilege| held.contains(privilege))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Satisfied when any one of the alternative conjunctions is satisfied. An
/// empty disjunction offers no alternatives and is never satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisjunctivePrivileges(Vec<ConjunctivePrivileges>);

impl DisjunctivePrivileges {
    pub fn new(alternatives: Vec<ConjunctivePrivileges>) -> Self {
        Self(alternatives)
    }

    pub fn alternatives(&self) -> &[ConjunctivePrivileges] {
        &self.0
    }

    pub fn is_satisfied_by(&self, held: &HashSet<Privilege>) -> bool {
        self.0
            .iter()
            .any(|conjunction| conjunction.is_satisfied_by(held))
    }
}
