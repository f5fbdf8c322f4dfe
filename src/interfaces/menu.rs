use crate::application::selector::payment_strategy;
use crate::domain::ports::Prompt;
use crate::error::Result;
use std::io::Write;

const BANNER: &str = "Welcome to the Payment System! You wish to purchase an item for $5. Pick an option:
  1. Use a credit card.
  2. Use a bank draft.
  3. Use an online payment system.
  4. Use an offline payment system.
  5. Quit.";

/// Runs the main menu until the user quits.
///
/// Options 1 through 4 select and run the matching payment workflow; `5` or
/// any response starting with `:q` (case-insensitive) exits the loop
/// cleanly. Anything else prints `Invalid option!` and the menu shows again.
pub fn run_menu(prompt: &mut dyn Prompt, out: &mut dyn Write) -> Result<()> {
    loop {
        writeln!(out, "{BANNER}")?;

        let response = prompt.ask("> ")?;
        if is_quit(&response) {
            break;
        }

        match response.as_str() {
            "1" => run_method("creditcard", prompt, out)?,
            "2" => run_method("bankdraft", prompt, out)?,
            "3" => run_method("online", prompt, out)?,
            "4" => run_method("offline", prompt, out)?,
            _ => writeln!(out, "Invalid option!")?,
        }

        // Blank line before the menu shows again.
        writeln!(out)?;
    }
    Ok(())
}

fn is_quit(response: &str) -> bool {
    response == "5"
        || response
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(":q"))
}

fn run_method(tag: &str, prompt: &mut dyn Prompt, out: &mut dyn Write) -> Result<()> {
    if let Some(workflow) = payment_strategy(tag) {
        workflow.run(prompt, out)?;
    }
    Ok(())
}
