// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use async_graphql::value;
use datacat_adapter_graphql::{ANONYMOUS_ACCESS_FORBIDDEN_MESSAGE, UNAUTHORIZED_ACTION_MESSAGE};
use datacat_core::auth::{CurrentActorSubject, Privilege};
use datacat_core::testing::MockEntityClient;
use datacat_core::{self as domain};
use indoc::indoc;
use pretty_assertions::assert_eq;

use crate::utils::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const UPDATE_OWNERSHIP_MUTATION: &str = indoc::indoc!(
    r#"
    mutation {
        dataProducts {
            update (
                urn: "urn:dc:dataProduct:pet-profiles",
                input: {
                    ownership: {
                        owners: [{ owner: "urn:dc:corpUser:bob", ownerType: TECHNICAL_OWNER }]
                    }
                },
            ) {
                urn
                ownership {
                    owners {
                        owner
                        ownerType
                    }
                }
            }
        }
    }
    "#
);

fn updated_ownership_record() -> domain::EntityRecord {
    domain::EntityRecord::new(data_product_urn("pet-profiles"))
        .with_aspect(
            domain::OWNERSHIP_ASPECT_NAME,
            &domain::Ownership {
                owners: vec![domain::Owner {
                    owner: "urn:dc:corpUser:bob".parse().unwrap(),
                    owner_type: domain::OwnershipType::TechnicalOwner,
                }],
                last_modified: None,
            },
        )
        .unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn update_submits_stamped_proposals_and_returns_fresh_read() {
    let mut entity_client = MockEntityClient::new();

    entity_client
        .expect_submit_proposals()
        .withf(|proposals, run_sync| {
            proposals.len() == 1
                && proposals[0].entity_urn == Some(data_product_urn("pet-profiles"))
                && proposals[0].aspect_name == domain::OWNERSHIP_ASPECT_NAME
                && !*run_sync
        })
        .times(1)
        .returning(|_, _| Ok(()));

    entity_client
        .expect_batch_get()
        .times(1)
        .returning(|_, urns, _| {
            let record = updated_ownership_record();
            Ok(urns
                .into_iter()
                .filter(|urn| *urn == record.urn)
                .map(|urn| (urn, record.clone()))
                .collect())
        });

    let harness = GraphQLDataProductsHarness::new(entity_client);

    let res = harness.execute_query(UPDATE_OWNERSHIP_MUTATION).await;

    assert!(res.is_ok(), "{res:?}");
    assert_eq!(
        res.data,
        value!({
            "dataProducts": {
                "update": {
                    "urn": "urn:dc:dataProduct:pet-profiles",
                    "ownership": {
                        "owners": [{
                            "owner": "urn:dc:corpUser:bob",
                            "ownerType": "TECHNICAL_OWNER",
                        }]
                    }
                }
            }
        })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn update_with_specific_privileges_instead_of_baseline() {
    let mut entity_client = MockEntityClient::new();
    entity_client
        .expect_submit_proposals()
        .times(1)
        .returning(|_, _| Ok(()));
    entity_client
        .expect_batch_get()
        .times(1)
        .returning(|_, urns, _| {
            let record = updated_ownership_record();
            Ok(urns
                .into_iter()
                .filter(|urn| *urn == record.urn)
                .map(|urn| (urn, record.clone()))
                .collect())
        });

    let harness = GraphQLDataProductsHarness::with_auth(
        entity_client,
        [Privilege::EditOwners],
        CurrentActorSubject::logged(actor_urn()),
    );

    let res = harness.execute_query(UPDATE_OWNERSHIP_MUTATION).await;
    assert!(res.is_ok(), "{res:?}");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn update_unauthorized_makes_no_remote_calls() {
    let mut entity_client = MockEntityClient::new();
    entity_client.expect_submit_proposals().times(0);
    entity_client.expect_batch_get().times(0);

    let harness = GraphQLDataProductsHarness::with_auth(
        entity_client,
        [],
        CurrentActorSubject::logged(actor_urn()),
    );

    let res = harness.execute_query(UPDATE_OWNERSHIP_MUTATION).await;

    assert!(res.is_err(), "{res:?}");
    assert_eq!(res.errors[0].message, UNAUTHORIZED_ACTION_MESSAGE);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn update_rejects_anonymous_callers() {
    let harness = GraphQLDataProductsHarness::with_auth(
        MockEntityClient::new(),
        [Privilege::EditEntity],
        CurrentActorSubject::anonymous(),
    );

    let res = harness.execute_query(UPDATE_OWNERSHIP_MUTATION).await;

    assert!(res.is_err(), "{res:?}");
    assert_eq!(res.errors[0].message, ANONYMOUS_ACCESS_FORBIDDEN_MESSAGE);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn batch_update_any_unauthorized_item_fails_whole_batch() {
    let mut entity_client = MockEntityClient::new();
    entity_client.expect_submit_proposals().times(0);
    entity_client.expect_batch_get().times(0);

    // Tags need no specific privilege, so the first item passes on its own,
    // but the second item needs EditStatus on top of EditOwners
    let harness = GraphQLDataProductsHarness::with_auth(
        entity_client,
        [Privilege::EditOwners],
        CurrentActorSubject::logged(actor_urn()),
    );

    let res = harness
        .execute_query(indoc!(
            r#"
            mutation {
                dataProducts {
                    batchUpdate (updates: [
                        {
                            urn: "urn:dc:dataProduct:alpha",
                            update: { tags: { tags: [] } }
                        },
                        {
                            urn: "urn:dc:dataProduct:beta",
                            update: {
                                ownership: { owners: [] },
                                deprecation: { deprecated: true, note: "superseded" }
                            }
                        },
                    ]) {
                        urn
                    }
                }
            }
            "#
        ))
        .await;

    assert!(res.is_err(), "{res:?}");
    assert_eq!(res.errors[0].message, UNAUTHORIZED_ACTION_MESSAGE);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn batch_update_submits_one_combined_batch() {
    let mut entity_client = MockEntityClient::new();

    entity_client
        .expect_submit_proposals()
        .withf(|proposals, run_sync| {
            proposals.len() == 2
                && proposals[0].entity_urn == Some(data_product_urn("alpha"))
                && proposals[1].entity_urn == Some(data_product_urn("beta"))
                && !*run_sync
        })
        .times(1)
        .returning(|_, _| Ok(()));

    entity_client
        .expect_batch_get()
        .times(1)
        .returning(|_, urns, _| {
            let records: HashMap<domain::Urn, domain::EntityRecord> = [
                data_product_record("alpha", "Alpha"),
                data_product_record("beta", "Beta"),
            ]
            .into_iter()
            .map(|record| (record.urn.clone(), record))
            .collect();
            Ok(urns
                .into_iter()
                .filter_map(|urn| records.get(&urn).map(|record| (urn, record.clone())))
                .collect())
        });

    let harness = GraphQLDataProductsHarness::new(entity_client);

    let res = harness
        .execute_query(indoc!(
            r#"
            mutation {
                dataProducts {
                    batchUpdate (updates: [
                        {
                            urn: "urn:dc:dataProduct:alpha",
                            update: { tags: { tags: [{ tag: "urn:dc:tag:pii" }] } }
                        },
                        {
                            urn: "urn:dc:dataProduct:beta",
                            update: { tags: { tags: [] } }
                        },
                    ]) {
                        urn
                        properties {
                            name
                        }
                    }
                }
            }
            "#
        ))
        .await;

    assert!(res.is_ok(), "{res:?}");
    assert_eq!(
        res.data,
        value!({
            "dataProducts": {
                "batchUpdate": [
                    {
                        "urn": "urn:dc:dataProduct:alpha",
                        "properties": { "name": "Alpha" },
                    },
                    {
                        "urn": "urn:dc:dataProduct:beta",
                        "properties": { "name": "Beta" },
                    },
                ]
            }
        })
    );
}
