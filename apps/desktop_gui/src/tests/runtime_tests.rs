use super::*;
use crate::fake_api::{poster, FakeApi};
use client_core::{ClientConfig, Storefront};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn submit_with_empty_cart_raises_notice_without_posting() {
    let api = FakeApi::new();
    let storefront = Storefront::with_api(api.clone());

    let event = handle_command(&storefront, BackendCommand::SubmitOrder).await;

    assert!(matches!(event, Some(UiEvent::Notice(ref text)) if text == "Cart is empty!"));
    assert_eq!(api.posts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn submit_posts_cart_and_reports_status() {
    let api = FakeApi::new();
    let storefront = Storefront::with_api(api.clone());
    storefront.cart().add_to_cart(poster());
    storefront.cart().add_to_cart(poster());

    let event = handle_command(&storefront, BackendCommand::SubmitOrder).await;

    assert!(matches!(event, Some(UiEvent::Info(ref text)) if text.contains("2 items")));
    assert!(storefront.cart().is_empty());
    assert_eq!(storefront.orders().orders().len(), 1);
}

#[tokio::test]
async fn failed_submit_raises_notice_and_keeps_cart() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let config = ClientConfig::from_base_url("http://127.0.0.1:1").expect("config");
    let storefront = Storefront::connect(&config);
    storefront.cart().add_to_cart(poster());

    let event = handle_command(&storefront, BackendCommand::SubmitOrder).await;

    assert!(matches!(event, Some(UiEvent::Notice(ref text)) if text == "Failed to submit order"));
    assert_eq!(storefront.cart().len(), 1);
}

#[tokio::test]
async fn failed_refresh_is_silent() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let config = ClientConfig::from_base_url("http://127.0.0.1:1").expect("config");
    let storefront = Storefront::connect(&config);

    let event = handle_command(&storefront, BackendCommand::RefreshOrders).await;

    assert!(event.is_none());
    assert!(storefront.orders().orders().is_empty());
}

#[test]
fn worker_processes_queued_commands_in_order() {
    let storefront = Storefront::with_api(FakeApi::new());
    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(8);
    let (ui_tx, ui_rx) = crossbeam_channel::bounded(8);
    let worker = launch(storefront.clone(), cmd_rx, ui_tx);

    cmd_tx.send(BackendCommand::LoadProducts).expect("queue");
    cmd_tx.send(BackendCommand::SubmitOrder).expect("queue");
    drop(cmd_tx);
    worker.join().expect("worker exits once the queue closes");

    let events: Vec<UiEvent> = ui_rx.try_iter().collect();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], UiEvent::Info(text) if text == "1 products available"));
    assert!(matches!(&events[1], UiEvent::Notice(text) if text == "Cart is empty!"));
    assert!(!storefront.catalog().is_loading());
}

#[test]
fn worker_waits_for_room_instead_of_dropping_notices() {
    let storefront = Storefront::with_api(FakeApi::new());
    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(8);
    let (ui_tx, ui_rx) = crossbeam_channel::bounded(1);
    for _ in 0..3 {
        cmd_tx.send(BackendCommand::SubmitOrder).expect("queue");
    }
    drop(cmd_tx);
    let worker = launch(storefront, cmd_rx, ui_tx);

    let notices: Vec<UiEvent> = ui_rx.iter().collect();
    worker.join().expect("worker exits once the queue closes");

    assert_eq!(notices.len(), 3);
    assert!(notices
        .iter()
        .all(|event| matches!(event, UiEvent::Notice(text) if text == "Cart is empty!")));
}

#[test]
fn delivery_to_a_closed_ui_queue_reports_failure() {
    let (ui_tx, ui_rx) = crossbeam_channel::bounded(1);
    drop(ui_rx);

    assert!(!deliver(&ui_tx, UiEvent::Info("late".to_string())));
}
