use super::*;

#[test]
fn payload_has_single_embed_with_footer() {
    let body = build_payload("hello", DEFAULT_EMBED_COLOR, "ops", "2026-01-01T00:00:00Z");
    let embeds = body["embeds"].as_array().unwrap();
    assert_eq!(embeds.len(), 1);
    let embed = &embeds[0];
    assert_eq!(embed["title"], EMBED_TITLE);
    assert_eq!(embed["description"], "hello");
    assert_eq!(embed["color"], 0x00ff_d5);
    assert_eq!(embed["timestamp"], "2026-01-01T00:00:00Z");
    assert_eq!(embed["footer"]["text"], "Active User: ops");
}

#[test]
fn missing_url_builds_disabled_notifier() {
    let config = NotifyConfig { webhook_url: None, user: "ops".into(), timeout_secs: 1 };
    let notifier = Notifier::from_config(&config).unwrap();
    assert!(!notifier.is_enabled());
}

#[test]
fn configured_url_builds_enabled_notifier() {
    let config = NotifyConfig { webhook_url: Some("http://127.0.0.1:9/hook".into()), user: "ops".into(), timeout_secs: 1 };
    let notifier = Notifier::from_config(&config).unwrap();
    assert!(notifier.is_enabled());
}

#[tokio::test]
async fn disabled_send_is_ok() {
    let notifier = Notifier::disabled("ops");
    assert!(notifier.send("ignored", DEFAULT_EMBED_COLOR).await.is_ok());
}

#[tokio::test]
async fn disabled_notify_does_not_panic() {
    Notifier::disabled("ops").notify("ignored");
}

#[tokio::test]
async fn unreachable_webhook_reports_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = NotifyConfig { webhook_url: Some(format!("http://{addr}/hook")), user: "ops".into(), timeout_secs: 2 };
    let notifier = Notifier::from_config(&config).unwrap();
    let err = notifier.send("hello", DEFAULT_EMBED_COLOR).await.unwrap_err();
    assert!(matches!(err, NotifyError::Request(_)));
}
