use crate::domain::fields::FieldSet;
use crate::domain::ports::Prompt;
use crate::error::Result;
use std::io::Write;

/// Gathers a field set by prompting the user, one field at a time.
pub type GatherFn = Box<dyn Fn(&mut dyn Prompt) -> Result<FieldSet>>;

/// Decides whether a gathered field set is acceptable.
pub type ValidateFn = Box<dyn Fn(&FieldSet) -> bool>;

/// The shared executor for every payment variant.
///
/// A workflow is composed of exactly two functions supplied at construction
/// and is immutable afterwards. Each menu selection builds a fresh workflow;
/// no state is shared between instances. `run` performs the whole
/// gather → validate → report sequence for one payment attempt.
pub struct PaymentWorkflow {
    gather: GatherFn,
    validate: ValidateFn,
}

impl PaymentWorkflow {
    pub fn new(gather: GatherFn, validate: ValidateFn) -> Self {
        Self { gather, validate }
    }

    /// Runs the workflow once: prompt for each field, validate, then report.
    ///
    /// On success two notices are printed, encrypting then processing, in
    /// that order. On a failed validation exactly one notice is printed.
    /// The "encryption" and "processing" are simulated; nothing is
    /// transformed or sent anywhere.
    pub fn run(&self, prompt: &mut dyn Prompt, out: &mut dyn Write) -> Result<()> {
        let fields = (self.gather)(prompt)?;

        if (self.validate)(&fields) {
            writeln!(out, "Encrypting payment information...")?;
            writeln!(out, "Processing payment...")?;
        } else {
            writeln!(out, "Invalid payment information!")?;
        }

        Ok(())
    }
}
