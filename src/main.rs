//! Life Premium CLI
//!
//! Interactive pricing of a single life policy

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use life_premium::auth::{StaticTokenAuthenticator, DEFAULT_ACCESS_TOKEN};
use life_premium::shell::{Session, SessionOutcome};

#[derive(Parser, Debug)]
#[command(name = "life_premium", version, about = "Price a life policy interactively")]
struct Args {
    /// Token the access gate accepts
    #[arg(long, env = "LIFE_PREMIUM_TOKEN", default_value = DEFAULT_ACCESS_TOKEN, hide_env_values = true)]
    expected_token: String,

    /// Also print the results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let auth = StaticTokenAuthenticator::new(args.expected_token);
    let session = Session::new(&auth);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = session.run(stdin.lock(), &mut stdout)?;

    if let (true, SessionOutcome::Completed(quote)) = (args.json, &outcome) {
        writeln!(stdout, "{}", serde_json::to_string_pretty(quote)?)?;
    }

    // Denied access and bad input still exit normally
    log::debug!("session finished: {:?}", outcome);
    Ok(())
}
