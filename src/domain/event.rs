use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Remove,
    Cream,
    Chocolate,
    Order,
}

/// A discrete user action, as recorded in a session script.
///
/// `value` carries the toggle flag for `cream`/`chocolate` and the
/// customer name for `order`; it is absent for `add`/`remove`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct SessionEvent {
    pub action: Action,
    pub value: Option<String>,
}
