use std::time::Duration;

use client_core::{
    view::{self, PageSnapshot},
    CatalogSnapshot, Storefront,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::protocol::{Order, Product};
use tokio::sync::watch;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

/// The storefront page: products, cart, and order history.
///
/// The cart is mutated directly on the UI thread; network work is queued to
/// the backend worker and its results arrive through the stores' watch
/// channels.
pub struct StorefrontApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    storefront: Storefront,

    catalog_rx: watch::Receiver<CatalogSnapshot>,
    cart_rx: watch::Receiver<Vec<Product>>,
    orders_rx: watch::Receiver<Vec<Order>>,
    page: PageSnapshot,

    status: String,
    status_banner: Option<UiError>,
    notice: Option<String>,
}

impl StorefrontApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        storefront: Storefront,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            catalog_rx: storefront.catalog().subscribe(),
            cart_rx: storefront.cart().subscribe(),
            orders_rx: storefront.orders().subscribe(),
            page: storefront.snapshot(),
            storefront,
            status: "Loading products".to_string(),
            status_banner: None,
            notice: None,
        };
        app.dispatch(BackendCommand::LoadProducts);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            tracing::warn!(command = cmd.name(), "{}", err.message());
            self.status_banner = Some(err);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Notice(message) => {
                    self.notice = Some(message);
                }
                UiEvent::Error(err) => {
                    tracing::error!("{}", err.banner_text());
                    self.status_banner = Some(err);
                }
            }
        }
    }

    /// Pulls whatever the stores published since the last frame.
    fn sync_from_stores(&mut self) {
        if self.catalog_rx.has_changed().unwrap_or(false) {
            let catalog = self.catalog_rx.borrow_and_update().clone();
            self.page.loading = catalog.is_loading();
            self.page.products = catalog.products;
        }
        if self.cart_rx.has_changed().unwrap_or(false) {
            self.page.cart = self.cart_rx.borrow_and_update().clone();
        }
        if self.orders_rx.has_changed().unwrap_or(false) {
            self.page.orders = self.orders_rx.borrow_and_update().clone();
        }
    }

    fn add_to_cart(&mut self, product: Product) {
        self.storefront.cart().add_to_cart(product);
        self.sync_from_stores();
    }

    fn clear_cart(&mut self) {
        self.storefront.cart().clear_cart();
        self.sync_from_stores();
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                if let Some(banner) = &self.status_banner {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, banner.banner_text());
                }
            });
        });
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.page.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.label(view::LOADING_PRODUCTS);
                });
                return;
            }

            ui.vertical_centered(|ui| {
                ui.heading(view::PAGE_TITLE);
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_products(ui);
                    ui.add_space(12.0);
                    self.show_cart(ui);
                    ui.add_space(12.0);
                    self.show_orders(ui);
                });
        });
    }

    fn show_products(&mut self, ui: &mut egui::Ui) {
        ui.heading("Products");
        let mut picked = None;
        for product in &self.page.products {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&product.name).strong());
                ui.label(product.display_price());
                if ui.button("Add to cart").clicked() {
                    picked = Some(product.clone());
                }
            });
        }
        if let Some(product) = picked {
            self.add_to_cart(product);
        }
    }

    fn show_cart(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        let mut clear = false;
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading("Cart");
            if self.page.cart.is_empty() {
                ui.label(view::EMPTY_CART);
            } else {
                for product in &self.page.cart {
                    ui.label(view::cart_line(product));
                }
            }
            ui.horizontal(|ui| {
                submit = ui.button("Submit Order").clicked();
                clear = ui
                    .add_enabled(!self.page.cart.is_empty(), egui::Button::new("Clear cart"))
                    .clicked();
            });
        });
        if submit {
            self.dispatch(BackendCommand::SubmitOrder);
        }
        if clear {
            self.clear_cart();
        }
    }

    fn show_orders(&mut self, ui: &mut egui::Ui) {
        let mut refresh = false;
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.heading("Orders");
            refresh = ui.button("Refresh orders").clicked();
            if self.page.orders.is_empty() {
                ui.label(view::NO_ORDERS);
            } else {
                for order in &self.page.orders {
                    ui.label(view::order_line(order));
                }
            }
        });
        if refresh {
            self.dispatch(BackendCommand::RefreshOrders);
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(notice);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.sync_from_stores();

        self.show_status_bar(ctx);
        self.show_page(ctx);
        self.show_notice(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
