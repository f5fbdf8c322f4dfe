use crate::application::workflow::{GatherFn, PaymentWorkflow, ValidateFn};
use crate::domain::fields::FieldSet;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::Prompt;

/// Selects the payment workflow matching a variant tag.
///
/// Returns a fully constructed workflow for one of the four known tags and
/// `None` for anything else. Construction wires the variant's gather and
/// validate functions into a fresh workflow; no I/O happens until the
/// returned workflow is run.
pub fn payment_strategy(tag: &str) -> Option<PaymentWorkflow> {
    PaymentMethod::from_tag(tag).map(build_workflow)
}

fn build_workflow(method: PaymentMethod) -> PaymentWorkflow {
    let specs = method.fields();

    let gather: GatherFn = Box::new(move |prompt: &mut dyn Prompt| {
        let mut fields = FieldSet::new();
        for spec in specs {
            fields.insert(spec.key, prompt.ask(spec.prompt)?);
        }
        Ok(fields)
    });

    let validate: ValidateFn = Box::new(move |fields: &FieldSet| {
        specs
            .iter()
            .all(|spec| spec.rule.is_match(fields.get(spec.key)))
    });

    PaymentWorkflow::new(gather, validate)
}
