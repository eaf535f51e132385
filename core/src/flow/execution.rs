// shopflow/src/flow/execution.rs

use crate::core::context::FlowContext;
use crate::core::control::{FlowOutcome, StepControl};
use crate::core::handler::Handler;
use crate::error::FlowError;
use crate::flow::definition::Flow;
use tracing::{event, instrument, span, Instrument, Level};

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Runs every step against `ctx`.
  ///
  /// Returns `Stopped` as soon as a handler asks to stop, the first handler
  /// error as-is, and `FlowError::HandlerMissing` (converted into `Err`) for a
  /// required step nobody handles.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(
      context_type = %std::any::type_name::<TData>(),
      num_steps = self.steps.len(),
    ),
    err(Display)
  )]
  pub async fn run(&self, ctx: FlowContext<TData>) -> Result<FlowOutcome, Err> {
    event!(Level::DEBUG, "Flow starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();
      let step_span = span!(
        Level::INFO,
        "flow_step",
        step_name = step_name,
        step_index = step_idx,
        optional = step_def.optional
      );

      if let Some(skip_if) = &step_def.skip_if {
        if skip_if(ctx.clone()) {
          event!(parent: &step_span, Level::DEBUG, "Step skipped by its skip condition.");
          continue;
        }
      }

      let phases: [(&str, Option<&Vec<Handler<TData, Err>>>); 3] = [
        ("before", self.before.get(step_name)),
        ("on", self.on.get(step_name)),
        ("after", self.after.get(step_name)),
      ];

      let handled = phases.iter().any(|(_, hs)| hs.map_or(false, |v| !v.is_empty()));
      if !handled {
        if step_def.optional {
          event!(parent: &step_span, Level::DEBUG, "Optional step has no handlers, skipping.");
          continue;
        }
        event!(parent: &step_span, Level::ERROR, "Required step has no handlers.");
        return Err(Err::from(FlowError::HandlerMissing {
          step_name: step_def.name.clone(),
        }));
      }

      for (phase, handlers) in phases {
        let Some(handlers) = handlers else { continue };
        for (handler_idx, handler_fn) in handlers.iter().enumerate() {
          let handler_span = span!(parent: &step_span, Level::DEBUG, "handler", phase, handler_index = handler_idx);
          match handler_fn(ctx.clone()).instrument(handler_span).await {
            Ok(StepControl::Continue) => {}
            Ok(StepControl::Stop) => {
              event!(parent: &step_span, Level::INFO, phase, "Flow stopped by a handler.");
              return Ok(FlowOutcome::Stopped);
            }
            Err(e) => {
              event!(parent: &step_span, Level::ERROR, phase, error = %e, "Handler failed.");
              return Err(e);
            }
          }
        }
      }
    }

    event!(Level::DEBUG, "Flow completed.");
    Ok(FlowOutcome::Completed)
  }
}
