use crate::domain::event::{Action, SessionEvent};
use crate::domain::message::OutgoingEmail;
use crate::domain::order::{Order, OrderRejection, OrderState};
use crate::domain::ports::MessageSenderBox;
use crate::error::{OrderError, Result};

/// Visible result of applying a single session event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The pending order changed; quantity and summary should be
    /// re-rendered.
    Updated,
    /// The event was refused; show the message, nothing changed.
    Notice(OrderRejection),
    /// The order was validated and its email handed to the sender.
    Placed(Order),
}

/// The main entry point for an order-entry session.
///
/// `OrderDesk` owns the pending order and the outbound message port. It
/// applies one event at a time and awaits delivery before accepting the
/// next, so a session never has more than one order in flight.
pub struct OrderDesk {
    state: OrderState,
    sender: MessageSenderBox,
}

impl OrderDesk {
    /// Creates a desk with an empty pending order.
    ///
    /// # Arguments
    ///
    /// * `sender` - The adapter that receives composed order emails.
    pub fn new(sender: MessageSenderBox) -> Self {
        Self {
            state: OrderState::new(),
            sender,
        }
    }

    /// Current pending order, for rendering.
    pub fn state(&self) -> &OrderState {
        &self.state
    }

    /// Applies a single session event.
    ///
    /// Refused operations come back as [`Outcome::Notice`]; only
    /// malformed events and transport failures are `Err`.
    pub async fn apply(&mut self, event: SessionEvent) -> Result<Outcome> {
        match event.action {
            Action::Add => Ok(Self::adjusted(self.state.increment())),
            Action::Remove => Ok(Self::adjusted(self.state.decrement())),
            Action::Cream => {
                let selected = Self::parse_flag(&event, "cream")?;
                self.state.set_cream(selected);
                Ok(Outcome::Updated)
            }
            Action::Chocolate => {
                let selected = Self::parse_flag(&event, "chocolate")?;
                self.state.set_chocolate(selected);
                Ok(Outcome::Updated)
            }
            Action::Order => {
                // An absent name field is an empty name, not a malformed
                // event; validation owns that refusal.
                let name = event.value.as_deref().unwrap_or("");
                match self.state.place(name) {
                    Ok(order) => {
                        let email = OutgoingEmail::from_order(&order);
                        tracing::info!(customer = %order.customer_name, "Forwarding order request");
                        self.sender.send(email).await?;
                        Ok(Outcome::Placed(order))
                    }
                    Err(rejection) => Ok(Outcome::Notice(rejection)),
                }
            }
        }
    }

    fn adjusted(result: std::result::Result<(), OrderRejection>) -> Outcome {
        match result {
            Ok(()) => Outcome::Updated,
            Err(rejection) => Outcome::Notice(rejection),
        }
    }

    fn parse_flag(event: &SessionEvent, what: &str) -> Result<bool> {
        let raw = event
            .value
            .as_deref()
            .ok_or_else(|| OrderError::EventError(format!("{what} toggle missing value")))?;
        raw.trim()
            .parse()
            .map_err(|_| OrderError::EventError(format!("invalid {what} toggle value: {raw}")))
    }
}
