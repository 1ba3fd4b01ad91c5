//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    LoadProducts,
    RefreshOrders,
    SubmitOrder,
}

impl BackendCommand {
    pub fn name(self) -> &'static str {
        match self {
            Self::LoadProducts => "load_products",
            Self::RefreshOrders => "refresh_orders",
            Self::SubmitOrder => "submit_order",
        }
    }
}
