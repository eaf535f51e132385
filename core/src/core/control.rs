// shopflow/src/core/control.rs

//! Flow control signals and run outcomes.

/// Returned by every handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
  /// Keep going: remaining handlers of this step, then the next step.
  Continue,
  /// Halt the whole flow right here. Not an error; `run` reports `FlowOutcome::Stopped`.
  Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  Completed,
  Stopped,
}

impl FlowOutcome {
  pub fn is_completed(self) -> bool {
    matches!(self, FlowOutcome::Completed)
  }
}
