use std::fmt::Debug;

/// A specific error condition orthogonal to [`Code`](crate::Code), for
/// example `purchase_limit_exceeded` or `insufficient_inventory`.
///
/// Domain crates usually implement this on their own enums:
///
/// ```rust
/// use op_status::Case;
///
/// #[derive(Debug)]
/// enum CheckoutCase {
///     PurchaseLimitExceeded,
///     InsufficientInventory,
/// }
///
/// impl Case for CheckoutCase {
///     fn identifier(&self) -> &str {
///         match self {
///             Self::PurchaseLimitExceeded => "purchase_limit_exceeded",
///             Self::InsufficientInventory => "insufficient_inventory",
///         }
///     }
/// }
/// ```
pub trait Case: Debug + Send + Sync {
    /// Stable string identifier of this case.
    fn identifier(&self) -> &str;
}

impl Case for &'static str {
    fn identifier(&self) -> &str {
        self
    }
}

impl Case for String {
    fn identifier(&self) -> &str {
        self.as_str()
    }
}
