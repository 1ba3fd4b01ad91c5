//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{RefreshOutcome, Storefront, SubmitOutcome};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread.
///
/// Commands are handled one at a time in the order the UI queued them. The
/// worker exits once every command sender is dropped or the UI stops
/// listening.
pub fn launch(
    storefront: Storefront,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                deliver(
                    &ui_tx,
                    UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: failed to build runtime: {err}"),
                    )),
                );
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::info!(command = cmd.name(), "backend: handling command");
                if let Some(event) = handle_command(&storefront, cmd).await {
                    if !deliver(&ui_tx, event) {
                        break;
                    }
                }
            }
            tracing::debug!("backend: command queue closed");
        });
    })
}

/// Hands an event to the UI, waiting for room in the queue. Returns `false`
/// once the UI side has gone away.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.send(event) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!("backend: UI event queue closed, dropping event");
            false
        }
    }
}

pub async fn handle_command(storefront: &Storefront, cmd: BackendCommand) -> Option<UiEvent> {
    match cmd {
        BackendCommand::LoadProducts => {
            let snapshot = storefront.catalog().load_products().await;
            Some(UiEvent::Info(format!(
                "{} products available",
                snapshot.products.len()
            )))
        }
        BackendCommand::RefreshOrders => match storefront.orders().fetch_orders().await {
            RefreshOutcome::Refreshed { orders } => {
                Some(UiEvent::Info(format!("Loaded {orders} orders")))
            }
            // Already logged by the gateway; the list on screen stays as it was.
            RefreshOutcome::Unchanged => None,
        },
        BackendCommand::SubmitOrder => match storefront.orders().submit_order().await {
            SubmitOutcome::Submitted { line_items } => Some(UiEvent::Info(format!(
                "Order submitted with {line_items} items"
            ))),
            other => other
                .notice()
                .map(|notice| UiEvent::Notice(notice.to_string())),
        },
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
