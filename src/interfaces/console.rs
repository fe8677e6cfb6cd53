use crate::application::desk::Outcome;
use crate::domain::event::{Action, SessionEvent};
use crate::domain::order::OrderState;

/// Usage hint for the interactive prompt.
pub const HELP: &str = "commands: add (+), remove (-), cream on|off, chocolate on|off, order <name>, quit";

/// What a line of interactive input asks the session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(SessionEvent),
    Quit,
    Help,
}

/// Parses one line of interactive input.
///
/// Anything unrecognized becomes `Help`, so the prompt reprints the
/// usage hint instead of dying.
pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "add" | "+" => command(Action::Add, None),
        "remove" | "-" => command(Action::Remove, None),
        "cream" => toggle(Action::Cream, rest),
        "chocolate" => toggle(Action::Chocolate, rest),
        // An empty name still becomes an event; validation owns that
        // refusal and answers with its own message.
        "order" => command(Action::Order, Some(rest)),
        "quit" | "exit" => Command::Quit,
        _ => Command::Help,
    }
}

fn command(action: Action, value: Option<&str>) -> Command {
    Command::Event(SessionEvent {
        action,
        value: value.map(str::to_string),
    })
}

fn toggle(action: Action, rest: &str) -> Command {
    let flag = match rest.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => "true",
        "off" | "false" | "no" => "false",
        _ => return Command::Help,
    };
    command(action, Some(flag))
}

/// Renders the visible reaction to an applied event.
pub fn render_outcome(outcome: &Outcome, state: &OrderState) -> String {
    match outcome {
        Outcome::Updated => render_state(state),
        Outcome::Notice(rejection) => rejection.to_string(),
        Outcome::Placed(order) => format!("Order placed for {}.", order.customer_name),
    }
}

/// Quantity line plus the price summary once at least one cup exists.
pub fn render_state(state: &OrderState) -> String {
    match state.summary() {
        Some(summary) => summary,
        None => format!("Quantity : {}", state.quantity()),
    }
}
