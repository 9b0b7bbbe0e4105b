// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use datacat_core::auth::{ConjunctivePrivileges, DisjunctivePrivileges, Privilege};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn held(privileges: &[Privilege]) -> HashSet<Privilege> {
    privileges.iter().copied().collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_conjunction_requires_every_privilege() {
    let conjunction =
        ConjunctivePrivileges::new(vec![Privilege::EditOwners, Privilege::EditStatus]);

    assert!(conjunction.is_satisfied_by(&held(&[
        Privilege::EditOwners,
        Privilege::EditStatus,
        Privilege::EditTags,
    ])));
    assert!(!conjunction.is_satisfied_by(&held(&[Privilege::EditOwners])));
    assert!(!conjunction.is_satisfied_by(&held(&[])));
}

#[test]
fn test_empty_conjunction_is_vacuously_satisfied() {
    let conjunction = ConjunctivePrivileges::new(vec![]);

    assert!(conjunction.is_satisfied_by(&held(&[])));
    assert!(conjunction.is_satisfied_by(&held(&[Privilege::EditEntity])));
}

#[test]
fn test_disjunction_satisfied_by_any_alternative() {
    let expression = DisjunctivePrivileges::new(vec![
        ConjunctivePrivileges::new(vec![Privilege::EditEntity]),
        ConjunctivePrivileges::new(vec![Privilege::EditOwners, Privilege::EditStatus]),
    ]);

    // First alternative
    assert!(expression.is_satisfied_by(&held(&[Privilege::EditEntity])));
    // Second alternative
    assert!(expression.is_satisfied_by(&held(&[
        Privilege::EditOwners,
        Privilege::EditStatus
    ])));
    // Neither
    assert!(!expression.is_satisfied_by(&held(&[Privilege::EditOwners])));
    assert!(!expression.is_satisfied_by(&held(&[])));
}

#[test]
fn test_empty_disjunction_is_never_satisfied() {
    let expression = DisjunctivePrivileges::new(vec![]);

    assert!(!expression.is_satisfied_by(&held(&[Privilege::EditEntity])));
}

#[test]
fn test_privilege_string_round_trip() {
    for privilege in [
        Privilege::EditEntity,
        Privilege::EditOwners,
        Privilege::EditStatus,
        Privilege::EditTags,
    ] {
        assert_eq!(privilege.to_string().parse::<Privilege>().unwrap(), privilege);
    }

    assert!("EDIT_EVERYTHING".parse::<Privilege>().is_err());
}
