//! The conversion lifecycle state machine.
//!
//! Drives validate → send → resolve for the shell's convert action. The
//! controller itself does no I/O: `trigger` hands back a dispatch order the
//! shell turns into one outbound request, and `resolve` is called when the
//! completion event comes back. Each dispatch gets a fresh generation from
//! a monotonic counter; a completion whose generation is not the current
//! one is stale and is discarded without touching any state. Re-triggering
//! while a request is in flight simply starts a new generation — the old
//! request's eventual completion loses the generation check no matter when
//! it arrives (last generation wins, not first arrival).

use crate::{ConvertError, ConvertedCode};

/// Target pane text shown before any conversion has run.
pub const INITIAL_TARGET_TEXT: &str = "// Converted JavaScript Code";
/// Target pane text for a success response that carried no converted text.
pub const EMPTY_RESULT_FALLBACK: &str = "// No JavaScript code generated";
/// Target pane text after a failed conversion.
pub const FAILURE_FALLBACK: &str = "// Server connection failed";
/// Banner message for an empty or whitespace-only source.
pub const VALIDATION_ERROR_MESSAGE: &str = "Please enter some Python code";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPhase {
    Idle,
    Validating,
    Pending,
    Succeeded,
    Failed,
}

/// What a trigger activation asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Local validation failed; no request may be issued.
    Rejected { message: String },
    /// Validation passed: issue exactly one request for this generation.
    Dispatch { generation: u64, code: String },
}

/// The state updates a non-stale completion produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// New target pane text.
    pub target_text: String,
    /// Banner message, if the conversion failed.
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ConversionController {
    phase: ConversionPhase,
    error: Option<String>,
    generation: u64,
}

impl ConversionController {
    pub fn new() -> Self {
        Self {
            phase: ConversionPhase::Idle,
            error: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> ConversionPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a request is in flight. The shell disables the trigger
    /// control on this — a UI affordance only; correctness comes from the
    /// generation check in [`ConversionController::resolve`].
    pub fn is_busy(&self) -> bool {
        self.phase == ConversionPhase::Pending
    }

    /// Activate the trigger with the current source text.
    ///
    /// Whitespace-only input fails validation locally: the controller
    /// returns to Idle with the banner message set and no request is made.
    /// Otherwise the generation counter advances and the caller must issue
    /// exactly one request carrying the returned generation.
    pub fn trigger(&mut self, source: &str) -> TriggerOutcome {
        self.phase = ConversionPhase::Validating;

        if source.trim().is_empty() {
            self.phase = ConversionPhase::Idle;
            self.error = Some(VALIDATION_ERROR_MESSAGE.to_string());
            return TriggerOutcome::Rejected {
                message: VALIDATION_ERROR_MESSAGE.to_string(),
            };
        }

        self.generation += 1;
        self.phase = ConversionPhase::Pending;
        self.error = None;
        TriggerOutcome::Dispatch {
            generation: self.generation,
            code: source.to_string(),
        }
    }

    /// Apply a completion for `generation`. Returns `None` — mutating
    /// nothing — when the completion is stale (a newer trigger superseded
    /// it) or no request is pending.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<ConvertedCode, ConvertError>,
    ) -> Option<Resolution> {
        if self.phase != ConversionPhase::Pending || generation != self.generation {
            return None;
        }

        match result {
            Ok(converted) => {
                self.phase = ConversionPhase::Succeeded;
                self.error = None;
                Some(Resolution {
                    target_text: converted
                        .javascript
                        .unwrap_or_else(|| EMPTY_RESULT_FALLBACK.to_string()),
                    error: None,
                })
            }
            Err(err) => {
                let message = err.user_message();
                self.phase = ConversionPhase::Failed;
                self.error = Some(message.clone());
                Some(Resolution {
                    target_text: FAILURE_FALLBACK.to_string(),
                    error: Some(message),
                })
            }
        }
    }
}

impl Default for ConversionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(js: &str) -> Result<ConvertedCode, ConvertError> {
        Ok(ConvertedCode {
            javascript: Some(js.to_string()),
        })
    }

    fn dispatch_generation(outcome: TriggerOutcome) -> u64 {
        match outcome {
            TriggerOutcome::Dispatch { generation, .. } => generation,
            TriggerOutcome::Rejected { message } => {
                panic!("expected dispatch, got rejection: {message}")
            }
        }
    }

    #[test]
    fn starts_idle_with_no_error() {
        let controller = ConversionController::new();
        assert_eq!(controller.phase(), ConversionPhase::Idle);
        assert_eq!(controller.error(), None);
        assert_eq!(controller.generation(), 0);
        assert!(!controller.is_busy());
    }

    #[test]
    fn empty_source_is_rejected_locally() {
        let mut controller = ConversionController::new();
        let outcome = controller.trigger("");
        assert_eq!(
            outcome,
            TriggerOutcome::Rejected {
                message: VALIDATION_ERROR_MESSAGE.to_string()
            }
        );
        assert_eq!(controller.phase(), ConversionPhase::Idle);
        assert_eq!(controller.error(), Some(VALIDATION_ERROR_MESSAGE));
        // No request was dispatched, so the counter never moved.
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn whitespace_source_is_rejected_locally() {
        let mut controller = ConversionController::new();
        let outcome = controller.trigger("   \n\t  ");
        assert!(matches!(outcome, TriggerOutcome::Rejected { .. }));
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn valid_trigger_dispatches_and_goes_pending() {
        let mut controller = ConversionController::new();
        let outcome = controller.trigger("x = 1");
        assert_eq!(
            outcome,
            TriggerOutcome::Dispatch {
                generation: 1,
                code: "x = 1".to_string()
            }
        );
        assert_eq!(controller.phase(), ConversionPhase::Pending);
        assert!(controller.is_busy());
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn trigger_clears_previous_error() {
        let mut controller = ConversionController::new();
        controller.trigger("");
        assert!(controller.error().is_some());
        controller.trigger("x = 1");
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn success_sets_target_text() {
        let mut controller = ConversionController::new();
        let generation = dispatch_generation(controller.trigger("x = 1"));
        let resolution = controller.resolve(generation, success("let x = 1;")).unwrap();
        assert_eq!(resolution.target_text, "let x = 1;");
        assert_eq!(resolution.error, None);
        assert_eq!(controller.phase(), ConversionPhase::Succeeded);
        assert!(!controller.is_busy());
    }

    #[test]
    fn success_without_text_uses_fallback() {
        let mut controller = ConversionController::new();
        let generation = dispatch_generation(controller.trigger("x = 1"));
        let resolution = controller
            .resolve(generation, Ok(ConvertedCode { javascript: None }))
            .unwrap();
        assert_eq!(resolution.target_text, EMPTY_RESULT_FALLBACK);
        assert_eq!(controller.phase(), ConversionPhase::Succeeded);
    }

    #[test]
    fn service_failure_sets_error_and_fallback() {
        let mut controller = ConversionController::new();
        let generation = dispatch_generation(controller.trigger("x = 1"));
        let resolution = controller
            .resolve(
                generation,
                Err(ConvertError::Service {
                    status: 500,
                    body: String::new(),
                }),
            )
            .unwrap();
        assert_eq!(resolution.target_text, FAILURE_FALLBACK);
        assert_eq!(
            resolution.error.as_deref(),
            Some("Conversion failed: HTTP 500")
        );
        assert_eq!(controller.phase(), ConversionPhase::Failed);
        assert_eq!(controller.error(), Some("Conversion failed: HTTP 500"));
    }

    #[test]
    fn network_failure_keeps_connection_wording() {
        let mut controller = ConversionController::new();
        let generation = dispatch_generation(controller.trigger("x = 1"));
        let resolution = controller
            .resolve(generation, Err(ConvertError::Network("timed out".into())))
            .unwrap();
        assert_eq!(
            resolution.error.as_deref(),
            Some("Connection error: timed out")
        );
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut controller = ConversionController::new();
        let first = dispatch_generation(controller.trigger("x = 1"));
        let second = dispatch_generation(controller.trigger("y = 2"));
        assert!(second > first);

        // The superseded request completes first — silently dropped.
        assert!(controller.resolve(first, success("let x = 1;")).is_none());
        assert_eq!(controller.phase(), ConversionPhase::Pending);
        assert_eq!(controller.error(), None);

        // The current generation still applies.
        let resolution = controller.resolve(second, success("let y = 2;")).unwrap();
        assert_eq!(resolution.target_text, "let y = 2;");
    }

    #[test]
    fn stale_completion_after_current_resolved_is_discarded() {
        let mut controller = ConversionController::new();
        let first = dispatch_generation(controller.trigger("x = 1"));
        let second = dispatch_generation(controller.trigger("y = 2"));

        // Out-of-order arrival: newest first, superseded second.
        let resolution = controller.resolve(second, success("let y = 2;")).unwrap();
        assert_eq!(resolution.target_text, "let y = 2;");
        assert!(controller
            .resolve(first, Err(ConvertError::Network("late".into())))
            .is_none());
        assert_eq!(controller.phase(), ConversionPhase::Succeeded);
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn resolve_without_pending_request_is_noop() {
        let mut controller = ConversionController::new();
        assert!(controller.resolve(0, success("let x = 1;")).is_none());
        assert!(controller.resolve(1, success("let x = 1;")).is_none());
        assert_eq!(controller.phase(), ConversionPhase::Idle);
    }

    #[test]
    fn duplicate_completion_for_same_generation_is_noop() {
        let mut controller = ConversionController::new();
        let generation = dispatch_generation(controller.trigger("x = 1"));
        assert!(controller.resolve(generation, success("let x = 1;")).is_some());
        assert!(controller.resolve(generation, success("other")).is_none());
    }

    #[test]
    fn generations_increase_across_triggers() {
        let mut controller = ConversionController::new();
        let g1 = dispatch_generation(controller.trigger("a"));
        controller.resolve(g1, success("a;"));
        let g2 = dispatch_generation(controller.trigger("b"));
        controller.resolve(g2, Err(ConvertError::Network("down".into())));
        let g3 = dispatch_generation(controller.trigger("c"));
        assert_eq!((g1, g2, g3), (1, 2, 3));
    }

    #[test]
    fn retrigger_after_failure_recovers() {
        let mut controller = ConversionController::new();
        let g1 = dispatch_generation(controller.trigger("x = 1"));
        controller.resolve(g1, Err(ConvertError::Network("down".into())));
        assert_eq!(controller.phase(), ConversionPhase::Failed);

        let g2 = dispatch_generation(controller.trigger("x = 1"));
        let resolution = controller.resolve(g2, success("let x = 1;")).unwrap();
        assert_eq!(resolution.target_text, "let x = 1;");
        assert_eq!(controller.error(), None);
    }
}
