use clap::Parser;
use justjava::application::desk::{OrderDesk, Outcome};
use justjava::domain::ports::MessageSenderBox;
use justjava::infrastructure::console::ConsoleMailer;
use justjava::infrastructure::outbox::JsonlOutbox;
use justjava::interfaces::console::{self, Command};
use justjava::interfaces::csv::event_reader::EventReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV session script to replay (interactive prompt when omitted)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Append composed order emails to this JSON-lines file instead of
    /// printing them
    #[arg(long)]
    outbox: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let sender: MessageSenderBox = match &cli.outbox {
        Some(path) => Box::new(JsonlOutbox::new(path)),
        None => Box::new(ConsoleMailer::new()),
    };
    let mut desk = OrderDesk::new(sender);

    match cli.script {
        Some(script) => run_script(&mut desk, &script).await,
        None => run_prompt(&mut desk).await,
    }
}

/// Replays a recorded session: malformed rows are reported and skipped,
/// the rest of the script still applies.
async fn run_script(desk: &mut OrderDesk, script: &Path) -> Result<()> {
    let file = File::open(script).into_diagnostic()?;
    let reader = EventReader::new(file);

    for event_result in reader.events() {
        match event_result {
            Ok(event) => match desk.apply(event).await {
                Ok(outcome) => report(&outcome),
                Err(e) => {
                    eprintln!("Error processing event: {}", e);
                }
            },
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    // Final state of the pending order, like the summary on screen.
    if let Some(summary) = desk.state().summary() {
        println!("{}", summary);
    }

    Ok(())
}

/// Script mode stays quiet on ordinary updates; only refusals and placed
/// orders are worth a line.
fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Updated => {}
        Outcome::Notice(rejection) => println!("{}", rejection),
        Outcome::Placed(order) => println!("Order placed for {}.", order.customer_name),
    }
}

async fn run_prompt(desk: &mut OrderDesk) -> Result<()> {
    println!("Just Java order desk. Type 'help' for commands.");
    println!("{}", console::render_state(desk.state()));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().into_diagnostic()?;

        line.clear();
        if stdin.lock().read_line(&mut line).into_diagnostic()? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        match console::parse_line(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", console::HELP),
            Command::Event(event) => match desk.apply(event).await {
                Ok(outcome) => println!("{}", console::render_outcome(&outcome, desk.state())),
                Err(e) => {
                    eprintln!("Error processing event: {}", e);
                }
            },
        }
    }

    Ok(())
}
