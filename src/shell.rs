//! Interactive pricing session
//!
//! Prompts for an access token, then for the six pricing inputs, and prints
//! the labelled results. Input is read as whitespace-separated tokens, so the
//! numbers may arrive one per line or all on one line.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::{debug, info};

use crate::assumptions::AssumptionSet;
use crate::auth::Authenticator;
use crate::error::{ActuarialError, ActuarialResult};
use crate::policy::Policy;
use crate::pricing::{ActuarialCalculator, PremiumQuote};

pub const BANNER: &str = "=== Actuarial Projection (Life) ===";
pub const ACCESS_DENIED: &str = "Access denied.";

/// How a session ended. All three are normal terminations.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed(PremiumQuote),
    AccessDenied,
    InputError(String),
}

/// Pricing inputs as read from the prompt, in prompt order
#[derive(Debug, Clone, Copy, PartialEq)]
struct PricingInputs {
    base_premium: f64,
    coverage_amount: f64,
    term_years: u32,
    mortality_rate: f64,
    expense_load: f64,
    interest_rate: f64,
}

/// Splits buffered input into whitespace-separated tokens across lines
struct Tokens<R> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    /// Rest of the current line with its terminator removed; `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            match self.next_line()? {
                Some(line) => {
                    self.pending = line.split_whitespace().rev().map(str::to_string).collect();
                }
                None => return Ok(None),
            }
        }
        Ok(self.pending.pop())
    }
}

/// Runs one prompt-driven pricing session against an injected access gate
pub struct Session<'a, A: Authenticator + ?Sized> {
    authenticator: &'a A,
    calculator: ActuarialCalculator,
}

impl<'a, A: Authenticator + ?Sized> Session<'a, A> {
    pub fn new(authenticator: &'a A) -> Self {
        Self {
            authenticator,
            calculator: ActuarialCalculator::new(),
        }
    }

    /// Drive the session to completion. Only I/O failures on the streams
    /// surface as `Err`; denied access and bad input are reported as outcomes.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> io::Result<SessionOutcome> {
        let mut tokens = Tokens::new(input);

        writeln!(output, "{}", BANNER)?;
        prompt(output, "Enter SSO token: ")?;
        let token = tokens.next_line()?.unwrap_or_default();
        if !self.authenticator.authenticate(&token) {
            info!("access denied");
            writeln!(output, "{}", ACCESS_DENIED)?;
            return Ok(SessionOutcome::AccessDenied);
        }

        match self.read_and_price(&mut tokens, output)? {
            Ok(quote) => {
                writeln!(output)?;
                writeln!(output, "--- Results ---")?;
                write!(output, "{}", quote)?;
                output.flush()?;
                Ok(SessionOutcome::Completed(quote))
            }
            Err(err) => {
                let message = err.to_string();
                debug!("session input rejected: {}", message);
                writeln!(output, "Input error: {}", message)?;
                Ok(SessionOutcome::InputError(message))
            }
        }
    }

    fn read_and_price<R: BufRead, W: Write>(
        &self,
        tokens: &mut Tokens<R>,
        output: &mut W,
    ) -> io::Result<ActuarialResult<PremiumQuote>> {
        let inputs = match read_inputs(tokens, output)? {
            Ok(inputs) => inputs,
            Err(err) => return Ok(Err(err)),
        };

        let assumptions = match AssumptionSet::new(inputs.mortality_rate, inputs.expense_load, inputs.interest_rate) {
            Ok(a) => a,
            Err(err) => return Ok(Err(err)),
        };
        let policy = match Policy::life(inputs.base_premium, inputs.coverage_amount, inputs.term_years) {
            Ok(p) => p,
            Err(err) => return Ok(Err(err)),
        };

        Ok(Ok(self.calculator.quote(&policy, &assumptions)))
    }
}

fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "{}", text)?;
    output.flush()
}

/// Prompt for one value and parse the next token as `T`
fn ask<T: FromStr, R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    output: &mut W,
    label: &str,
    kind: &str,
) -> io::Result<ActuarialResult<T>> {
    prompt(output, label)?;
    let parsed = match tokens.next_token()? {
        Some(token) => token
            .parse::<T>()
            .map_err(|_| ActuarialError::InvalidInput(format!("expected {} but found '{}'", kind, token))),
        None => Err(ActuarialError::InvalidInput("unexpected end of input".to_string())),
    };
    Ok(parsed)
}

fn read_inputs<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    output: &mut W,
) -> io::Result<ActuarialResult<PricingInputs>> {
    macro_rules! field {
        ($label:expr, $kind:expr) => {
            match ask(tokens, output, $label, $kind)? {
                Ok(v) => v,
                Err(err) => return Ok(Err(err)),
            }
        };
    }

    let base_premium: f64 = field!("Base premium: ", "a number");
    let coverage_amount: f64 = field!("Coverage amount: ", "a number");
    let term_years: u32 = field!("Term (years): ", "a whole number of years");
    let mortality_rate: f64 = field!("Mortality rate (e.g., 0.002): ", "a number");
    let expense_load: f64 = field!("Expense load (e.g., 0.10): ", "a number");
    let interest_rate: f64 = field!("Interest rate (e.g., 0.04): ", "a number");

    Ok(Ok(PricingInputs {
        base_premium,
        coverage_amount,
        term_years,
        mortality_rate,
        expense_load,
        interest_rate,
    }))
}
