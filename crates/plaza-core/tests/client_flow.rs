/// End-to-end flows through the `Client` facade with device-local storage:
/// register, log in, publish and manage listings, log out. Mirrors what the
/// screens do, minus the screens.
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use plaza_core::{Client, CoreError, ListingDraft, SortMode};

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plaza_client_{}", name));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn draft(title: &str, price: &str) -> ListingDraft {
    ListingDraft {
        title: title.to_string(),
        description: "a project".to_string(),
        display_price: price.to_string(),
        party_size: Some("2".to_string()),
        contact_phone: Some("11 98888-1111".to_string()),
    }
}

#[tokio::test]
async fn register_login_and_session_round_trip() {
    let client = Client::open(&test_dir("register_login")).unwrap();

    client
        .register("Ana", "ana@example.com", "secret1", Some("11 99999-0000"))
        .await
        .unwrap();

    let session = client.login("ana@example.com", "secret1").await.unwrap();
    assert_eq!(session.display_name.as_deref(), Some("Ana"));
    assert_eq!(session.email.as_deref(), Some("ana@example.com"));
    assert_eq!(session.phone_display.as_deref(), Some("11 99999-0000"));

    // The session is durable, not in-memory state of this client.
    assert_eq!(client.session().load(), session);
}

#[tokio::test]
async fn wrong_credentials_fail_with_one_generic_error() {
    let client = Client::open(&test_dir("bad_login")).unwrap();

    client
        .register("Ana", "ana@example.com", "secret1", None)
        .await
        .unwrap();

    let wrong_password = client.login("ana@example.com", "nope99").await.unwrap_err();
    let wrong_email = client.login("bob@example.com", "secret1").await.unwrap_err();

    assert!(matches!(wrong_password, CoreError::AuthFailure));
    assert!(matches!(wrong_email, CoreError::AuthFailure));
    // Neither failure touched the session.
    assert_eq!(client.session().load().email, None);
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let client = Client::open(&test_dir("duplicate")).unwrap();

    client
        .register("Ana", "ana@example.com", "secret1", None)
        .await
        .unwrap();
    let err = client
        .register("Outra", "ana@example.com", "secret2", None)
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::DuplicateEmail));
}

#[tokio::test]
async fn published_listings_carry_the_owner_and_show_in_the_feed() {
    let client = Client::open(&test_dir("publish")).unwrap();

    client
        .register("Ana", "ana@example.com", "secret1", None)
        .await
        .unwrap();
    client.login("ana@example.com", "secret1").await.unwrap();
    client.set_avatar("file:///avatars/ana.png").unwrap();

    let listing = client.publish_listing(draft("Site novo", "1.500,00")).await.unwrap();
    thread::sleep(Duration::from_millis(2)); // ids are millisecond timestamps
    client.publish_listing(draft("Logo", "20,00")).await.unwrap();

    assert_eq!(listing.owner_name, "Ana");
    assert_eq!(listing.owner_email.as_deref(), Some("ana@example.com"));
    assert_eq!(listing.owner_avatar_ref.as_deref(), Some("file:///avatars/ana.png"));

    let feed = client.feed("", SortMode::MostRecent);
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].title, "Logo");

    let by_value = client.feed("", SortMode::HighestValue);
    assert_eq!(by_value[0].title, "Site novo");

    let searched = client.feed("site", SortMode::MostRecent);
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].title, "Site novo");
}

#[tokio::test]
async fn only_the_owner_can_remove_a_listing() {
    let dir = test_dir("ownership");
    let client = Client::open(&dir).unwrap();

    client
        .register("Ana", "ana@example.com", "secret1", None)
        .await
        .unwrap();
    client
        .register("Bob", "bob@example.com", "secret2", None)
        .await
        .unwrap();

    client.login("ana@example.com", "secret1").await.unwrap();
    let listing = client.publish_listing(draft("Site", "100,00")).await.unwrap();

    // Bob logs in on the same device and sees the shared feed, but the
    // listing is not his.
    client.login("bob@example.com", "secret2").await.unwrap();
    assert!(client.my_listings().is_empty());
    let err = client.remove_listing(&listing.id).unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(client.feed("", SortMode::MostRecent).len(), 1);

    // Back as the owner it is listed and removable.
    client.login("ana@example.com", "secret1").await.unwrap();
    assert_eq!(client.my_listings().len(), 1);
    client.remove_listing(&listing.id).unwrap();
    assert!(client.feed("", SortMode::MostRecent).is_empty());

    // Removing it again is a quiet no-op.
    client.remove_listing(&listing.id).unwrap();
}

#[tokio::test]
async fn logout_clears_the_session_and_its_avatar() {
    let client = Client::open(&test_dir("logout")).unwrap();

    client
        .register("Ana", "ana@example.com", "secret1", None)
        .await
        .unwrap();
    client.login("ana@example.com", "secret1").await.unwrap();
    client.set_avatar("file:///avatars/ana.png").unwrap();

    client.logout().unwrap();

    let session = client.session().load();
    assert_eq!(session.display_name, None);
    assert_eq!(session.email, None);
    assert_eq!(session.avatar_ref, None);
    assert_eq!(client.session().load_avatar("ana@example.com"), None);

    // A fresh login works and starts with no avatar.
    let session = client.login("ana@example.com", "secret1").await.unwrap();
    assert_eq!(session.avatar_ref, None);
}

#[tokio::test]
async fn listings_survive_a_restart() {
    let dir = test_dir("restart");

    {
        let client = Client::open(&dir).unwrap();
        client
            .register("Ana", "ana@example.com", "secret1", None)
            .await
            .unwrap();
        client.login("ana@example.com", "secret1").await.unwrap();
        client.publish_listing(draft("Site", "100,00")).await.unwrap();
    }

    let client = Client::open(&dir).unwrap();
    let feed = client.feed("", SortMode::MostRecent);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, "Site");
    // The session came back too, and the account still authenticates.
    assert_eq!(client.session().load().display_name.as_deref(), Some("Ana"));
    client.login("ana@example.com", "secret1").await.unwrap();
}
