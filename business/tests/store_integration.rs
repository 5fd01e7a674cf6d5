//! `TeamStore` against a mocked PostgREST surface.

mod common;

use roster_business::team::{MemberId, NewTeamMember, Role};
use roster_business::{StoreConfig, StoreError, TeamStore};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{API_KEY, official, volunteer};

fn store(server: &MockServer) -> TeamStore {
    TeamStore::new(StoreConfig::new(server.uri()).with_api_key(API_KEY))
}

#[tokio::test]
async fn list_members_requests_newest_first_with_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/team_members"))
        .and(query_param("select", "*"))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", API_KEY))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            volunteer("v1", "S. Nair", "Stage Coordinator", "Evening (2PM-8PM)", "2024-05-02T10:00:00Z"),
            official("o1", "A. Roy", "Event Director", "2024-05-01T10:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let members = store(&server).list_members().await.expect("list should succeed");

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "S. Nair");
    assert_eq!(members[0].role, Role::Volunteer);
    assert_eq!(members[1].id, MemberId::new("o1"));
}

#[tokio::test]
async fn list_members_without_key_sends_no_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/team_members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = TeamStore::new(StoreConfig::new(server.uri()));
    assert!(store.list_members().await.expect("list").is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].headers.get("apikey").is_none());
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn malformed_rows_do_not_hide_valid_ones() {
    let server = MockServer::start().await;
    let mut sponsor = official("s1", "K. Das", "Event Director", "2024-05-03T10:00:00Z");
    sponsor["role"] = json!("sponsor");
    let mut unlabelled = volunteer("v1", "S. Nair", "Stage Coordinator", "Evening (2PM-8PM)", "2024-05-02T10:00:00Z");
    unlabelled["responsibilities"] = json!(null);
    Mock::given(method("GET"))
        .and(path("/rest/v1/team_members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sponsor,
            unlabelled,
            official("o1", "A. Roy", "Event Director", "2024-05-01T10:00:00Z"),
        ])))
        .mount(&server)
        .await;

    let members = store(&server).list_members().await.expect("list should succeed");

    let ids: Vec<_> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![MemberId::new("v1"), MemberId::new("o1")]);
    assert_eq!(members[0].responsibilities, "");
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/team_members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "oops" })))
        .mount(&server)
        .await;

    let err = store(&server).list_members().await.expect_err("body is not a list");
    assert!(matches!(err, StoreError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/team_members"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = store(&server).list_members().await.expect_err("500 must fail");
    assert_eq!(
        err,
        StoreError::Status {
            status: 500,
            body: "boom".to_owned(),
        }
    );
}

#[tokio::test]
async fn insert_member_posts_minimal_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/team_members"))
        .and(header("prefer", "return=minimal"))
        .and(body_json(json!({
            "name": "A. Roy",
            "email": null,
            "mobile": null,
            "responsibilities": "Finance Manager",
            "shift_details": null,
            "role": "official",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let member = NewTeamMember {
        name: "A. Roy".to_owned(),
        email: None,
        mobile: None,
        responsibilities: "Finance Manager".to_owned(),
        shift_details: None,
        role: Role::Official,
    };

    store(&server)
        .insert_member(&member)
        .await
        .expect("insert should succeed");
}

#[tokio::test]
async fn delete_member_filters_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/team_members"))
        .and(query_param("id", "eq.o1"))
        .and(header("prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([official(
            "o1",
            "A. Roy",
            "Event Director",
            "2024-05-01T10:00:00Z"
        )])))
        .expect(1)
        .mount(&server)
        .await;

    store(&server)
        .delete_member(MemberId::new("o1"))
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn deleting_nothing_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/team_members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = store(&server)
        .delete_member(MemberId::new("ghost"))
        .await
        .expect_err("nothing was deleted");
    assert_eq!(err, StoreError::NotFound(MemberId::new("ghost")));
}

#[tokio::test]
async fn unconfigured_store_never_sends() {
    let err = TeamStore::new(StoreConfig::default())
        .list_members()
        .await
        .expect_err("no url");
    assert_eq!(err, StoreError::MissingConfig("ROSTER_STORE_URL"));
}
