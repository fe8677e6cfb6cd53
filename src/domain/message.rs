use super::order::Order;
use serde::{Deserialize, Serialize};

/// Inbox that receives every order request.
pub const ORDER_INBOX: &str = "developerdepository@gmail.com";

/// A fully-composed mail message.
///
/// The desk hands one of these to whatever [`MessageSender`] the session
/// was wired with; delivery is entirely the adapter's concern.
///
/// [`MessageSender`]: super::ports::MessageSender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    /// Renders the fixed order-request template for `order`.
    ///
    /// The body always says "cups" regardless of quantity; only the
    /// on-screen summary pluralizes.
    pub fn from_order(order: &Order) -> Self {
        let subject = format!("Just Java - Order Request for {}", order.customer_name);

        let body = format!(
            "Order Summary : \n\n\
             Name : {}\n\
             Whipped Cream Added? : {}\n\
             Chocolate Added? : {}\n\
             Quantity : {} cups\n\
             Total Price : $ {}\n\n\
             Thank You!",
            order.customer_name, order.cream, order.chocolate, order.quantity, order.total
        );

        Self {
            to: ORDER_INBOX.to_string(),
            subject,
            body,
        }
    }
}

impl From<&Order> for OutgoingEmail {
    fn from(order: &Order) -> Self {
        Self::from_order(order)
    }
}
