use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payflow::application::selector::payment_strategy;
use payflow::infrastructure::stdio::StdinPrompt;
use payflow::interfaces::menu::run_menu;
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run a single payment method by tag (creditcard, bankdraft, online,
    /// offline) instead of the interactive menu
    #[arg(long)]
    method: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut prompt = StdinPrompt::new();
    let mut out = io::stdout();

    match cli.method {
        Some(tag) => {
            let workflow = payment_strategy(&tag)
                .ok_or_else(|| miette::miette!("unknown payment method: {tag}"))?;
            workflow.run(&mut prompt, &mut out).into_diagnostic()?;
        }
        None => run_menu(&mut prompt, &mut out).into_diagnostic()?,
    }

    Ok(())
}
