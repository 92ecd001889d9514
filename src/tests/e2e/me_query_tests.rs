use crate::shell::graphql::build_schema;
use crate::tests::fixtures::state::{make_offline_state, make_test_state};
use rstest::rstest;
use serde_json::json;

const ME_QUERY: &str = "{ me { id username } }";

#[rstest]
#[tokio::test]
async fn it_should_return_the_placeholder_user() {
    let schema = build_schema(make_test_state()).unwrap();
    let response = schema.execute(ME_QUERY).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "me": { "id": "1", "username": "@ava" } })
    );
}

#[rstest]
#[tokio::test]
async fn it_should_return_identical_output_when_resolved_twice() {
    let schema = build_schema(make_test_state()).unwrap();
    let first = schema.execute(ME_QUERY).await.data.into_json().unwrap();
    let second = schema.execute(ME_QUERY).await.data.into_json().unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn it_should_not_depend_on_the_user_directory() {
    let schema = build_schema(make_offline_state()).unwrap();
    let response = schema.execute(ME_QUERY).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "me": { "id": "1", "username": "@ava" } })
    );
}
