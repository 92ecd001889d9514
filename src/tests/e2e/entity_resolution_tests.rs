use crate::shell::graphql::{AppState, build_schema};
use crate::tests::fixtures::state::{make_offline_state, make_test_state};
use async_graphql::{Request, Response, Variables};
use rstest::rstest;
use serde_json::{Value, json};

const ENTITIES_QUERY: &str = r#"
    query ($representations: [_Any!]!) {
        _entities(representations: $representations) {
            __typename
            ... on User { id username }
        }
    }
"#;

async fn resolve(state: AppState, representations: Value) -> Response {
    let schema = build_schema(state).unwrap();
    let request = Request::new(ENTITIES_QUERY).variables(Variables::from_json(
        json!({ "representations": representations }),
    ));
    schema.execute(request).await
}

#[rstest]
#[tokio::test]
async fn it_should_resolve_a_user_reference() {
    let response = resolve(
        make_test_state(),
        json!([{ "__typename": "User", "id": "1" }]),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "_entities": [{ "__typename": "User", "id": "1", "username": "@ava" }] })
    );
}

#[rstest]
#[tokio::test]
async fn it_should_resolve_several_references_in_order() {
    let response = resolve(
        make_test_state(),
        json!([
            { "__typename": "User", "id": "2" },
            { "__typename": "User", "id": "1" },
        ]),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["_entities"][0]["id"], "2");
    assert_eq!(data["_entities"][0]["username"], "@ben");
    assert_eq!(data["_entities"][1]["id"], "1");
}

#[rstest]
#[tokio::test]
async fn it_should_resolve_an_unknown_user_to_null() {
    let response = resolve(
        make_test_state(),
        json!([
            { "__typename": "User", "id": "404" },
            { "__typename": "User", "id": "1" },
        ]),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["_entities"][0], Value::Null);
    assert_eq!(data["_entities"][1]["id"], "1");
}

#[rstest]
#[tokio::test]
async fn it_should_return_an_error_when_the_directory_is_offline() {
    let response = resolve(
        make_offline_state(),
        json!([{ "__typename": "User", "id": "1" }]),
    )
    .await;

    assert!(!response.errors.is_empty());
    assert!(
        response.errors[0].message.contains("User directory offline"),
        "{:?}",
        response.errors
    );
}

#[rstest]
#[tokio::test]
async fn it_should_expose_the_key_through_the_service_sdl() {
    let schema = build_schema(make_test_state()).unwrap();
    let response = schema.execute("{ _service { sdl } }").await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let sdl = data["_service"]["sdl"].as_str().unwrap();
    assert!(sdl.contains(r#"@key(fields: "id")"#), "{sdl}");
}
