//! Behaviour of `UserService` against the in-memory store.

mod support;

use eventdesk_domain::EventDeskError;
use support::Harness;

#[tokio::test(flavor = "multi_thread")]
async fn create_user_assigns_ids_in_order() {
    let harness = Harness::new();

    let ana = harness.users.create_user(Some("Ana".into())).await.unwrap();
    let ana_again = harness.users.create_user(Some("Ana".into())).await.unwrap();

    assert_eq!(ana.user_id, 1);
    assert_eq!(ana_again.user_id, 2);
    assert_eq!(harness.users.list_users().await.unwrap(), vec![ana, ana_again]);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_user_requires_a_name() {
    let harness = Harness::new();

    for name in [None, Some(String::new()), Some(" \t".into())] {
        let err = harness.users.create_user(name).await.unwrap_err();
        assert_eq!(err, EventDeskError::InvalidInput("The userName field is required.".into()));
    }
    assert!(harness.users.list_users().await.unwrap().is_empty());
}
