// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{TimeZone, Utc};
use datacat_core::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_deprecation_unset_fields_are_not_serialized() {
    let deprecation = Deprecation {
        deprecated: true,
        note: "superseded by v2".to_string(),
        decommission_time: None,
        actor: None,
    };

    let json = serde_json::to_value(&deprecation).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "deprecated": true,
            "note": "superseded by v2",
        })
    );

    // And absent keys decode back into None
    let back: Deprecation = serde_json::from_value(json).unwrap();
    assert_eq!(back, deprecation);
}

#[test]
fn test_deprecation_set_fields_are_serialized() {
    let deprecation = Deprecation {
        deprecated: true,
        note: String::new(),
        decommission_time: Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
        actor: Some(Urn::new(CORP_USER_ENTITY_NAME, "jdoe")),
    };

    let json = serde_json::to_value(&deprecation).unwrap();
    assert_eq!(json["actor"], serde_json::json!("urn:dc:corpUser:jdoe"));
    assert!(json.get("decommissionTime").is_some());
}

#[test]
fn test_aspect_map_absent_aspect_is_not_an_error() {
    let record = EntityRecord::new(Urn::new(DATA_PRODUCT_ENTITY_NAME, "pets"));

    let status: Option<Status> = record.aspects.get_as(STATUS_ASPECT_NAME).unwrap();
    assert_eq!(status, None);
}

#[test]
fn test_aspect_map_round_trip() {
    let record = EntityRecord::new(Urn::new(DATA_PRODUCT_ENTITY_NAME, "pets"))
        .with_aspect(STATUS_ASPECT_NAME, &Status { removed: false })
        .unwrap()
        .with_aspect(
            GLOBAL_TAGS_ASPECT_NAME,
            &GlobalTags {
                tags: vec![TagAssociation {
                    tag: Urn::new("tag", "pii"),
                }],
            },
        )
        .unwrap();

    assert!(record.aspects.contains(STATUS_ASPECT_NAME));
    assert_eq!(record.aspects.len(), 2);

    let status: Status = record
        .aspects
        .get_as(STATUS_ASPECT_NAME)
        .unwrap()
        .unwrap();
    assert_eq!(status, Status { removed: false });

    let tags: GlobalTags = record
        .aspects
        .get_as(GLOBAL_TAGS_ASPECT_NAME)
        .unwrap()
        .unwrap();
    assert_eq!(tags.tags[0].tag, Urn::new("tag", "pii"));
}

#[test]
fn test_aspect_map_undecodable_payload_is_an_error() {
    let record = EntityRecord::new(Urn::new(DATA_PRODUCT_ENTITY_NAME, "pets"))
        .with_aspect(STATUS_ASPECT_NAME, &serde_json::json!({"removed": "yes"}))
        .unwrap();

    assert!(record.aspects.get_as::<Status>(STATUS_ASPECT_NAME).is_err());
}

#[test]
fn test_change_proposal_carries_aspect_payload() {
    let audit = AuditStamp {
        time: Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap(),
        actor: Urn::new(CORP_USER_ENTITY_NAME, "jdoe"),
    };

    let proposal = ChangeProposal::upsert(
        DATA_PRODUCT_ENTITY_NAME,
        STATUS_ASPECT_NAME,
        &Status { removed: true },
        audit.clone(),
    )
    .unwrap();

    assert_eq!(proposal.entity_urn, None);
    assert_eq!(proposal.entity_type, DATA_PRODUCT_ENTITY_NAME);
    assert_eq!(proposal.aspect_name, STATUS_ASPECT_NAME);
    assert_eq!(proposal.change_type, ChangeType::Upsert);
    assert_eq!(proposal.audit, audit);
    assert_eq!(
        proposal.decode_aspect::<Status>().unwrap(),
        Status { removed: true }
    );
}
