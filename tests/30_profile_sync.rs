mod common;

use std::time::Duration;

use anyhow::Result;
use serde_json::json;

use marine_tracker_client::models::ProfileUpdate;
use marine_tracker_client::profile::save_profile;
use marine_tracker_client::{EventBus, ProfileChanged, ProfileSync};

const WAIT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn broadcast_refetches_once_per_mounted_instance() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/profile", 200, common::profile_json("Erik"));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let bus = EventBus::new();

    let header = ProfileSync::mount(gateway.clone(), &bus).await;
    let sidebar = ProfileSync::mount(gateway.clone(), &bus).await;
    let settings = ProfileSync::mount(gateway.clone(), &bus).await;
    assert_eq!(backend.requests_to("GET", "/profile").len(), 3);

    assert_eq!(bus.publish(&ProfileChanged), 3);

    for sync in [&header, &sidebar, &settings] {
        assert!(sync.wait_for_fetches(2, WAIT).await);
    }
    assert_eq!(backend.requests_to("GET", "/profile").len(), 6);
    Ok(())
}

#[tokio::test]
async fn broadcast_without_listeners_is_not_queued() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/profile", 200, common::profile_json("Erik"));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let bus = EventBus::new();

    assert_eq!(bus.publish(&ProfileChanged), 0);

    let sync = ProfileSync::mount(gateway, &bus).await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(sync.fetch_count(), 1);
    assert_eq!(backend.requests_to("GET", "/profile").len(), 1);
    Ok(())
}

#[tokio::test]
async fn saved_profile_reaches_mounted_views() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/profile", 200, common::profile_json("Erik"));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let bus = EventBus::new();

    let header = ProfileSync::mount(gateway.clone(), &bus).await;
    assert_eq!(header.view().map(|v| v.display_name()).as_deref(), Some("Erik Hansen"));

    // Backend now reflects the edit
    backend.respond("PUT", "/profile", 200, common::profile_json("Erika"));
    backend.respond("GET", "/profile", 200, common::profile_json("Erika"));

    let update = ProfileUpdate {
        first_name: Some("Erika".to_string()),
        ..Default::default()
    };
    save_profile(&gateway, &bus, &update).await?;

    assert!(header.wait_for_fetches(2, WAIT).await);
    let view = header.view().expect("profile view populated");
    assert_eq!(view.first_name, "Erika");
    assert_eq!(view.initials(), "EH");
    assert_eq!(backend.requests_to("PUT", "/profile")[0].body, Some(json!({"first_name": "Erika"})));
    Ok(())
}

#[tokio::test]
async fn failed_save_does_not_broadcast() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/profile", 200, common::profile_json("Erik"));
    backend.respond("PUT", "/profile", 400, json!({"detail": "Email already registered"}));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let bus = EventBus::new();
    let header = ProfileSync::mount(gateway.clone(), &bus).await;

    let update = ProfileUpdate {
        email: Some("taken@example.com".to_string()),
        ..Default::default()
    };
    let err = save_profile(&gateway, &bus, &update).await.unwrap_err();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(err.to_string(), "Email already registered");
    assert_eq!(header.fetch_count(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_refetch_keeps_cached_view() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/profile", 200, common::profile_json("Erik"));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let bus = EventBus::new();
    let header = ProfileSync::mount(gateway, &bus).await;

    backend.respond_raw("GET", "/profile", 503, "");
    bus.publish(&ProfileChanged);

    assert!(header.wait_for_fetches(2, WAIT).await);
    assert_eq!(header.view().map(|v| v.first_name).as_deref(), Some("Erik"));
    Ok(())
}

#[tokio::test]
async fn unmounted_instance_no_longer_refetches() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/profile", 200, common::profile_json("Erik"));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let bus = EventBus::new();

    let kept = ProfileSync::mount(gateway.clone(), &bus).await;
    let dropped = ProfileSync::mount(gateway.clone(), &bus).await;
    drop(dropped);

    assert_eq!(bus.publish(&ProfileChanged), 1);
    assert!(kept.wait_for_fetches(2, WAIT).await);
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(backend.requests_to("GET", "/profile").len(), 3);
    Ok(())
}
