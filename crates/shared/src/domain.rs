use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ProductId);
id_newtype!(OrderId);

/// Renders a catalog price the way the storefront page shows it: a dollar
/// sign followed by the amount as received (`$9.99`, `$10`).
pub fn format_price(amount: f64) -> String {
    format!("${amount}")
}
