// ramus_core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Classified failures of one branch resolution.
///
/// Both variants are terminal for the resolution that produced them: the
/// resolver performs no local recovery and never downgrades a failure to a
/// default-branch selection. The caller decides whether the owning task
/// execution is failed, retried, or escalated.
#[derive(Debug, Error)]
pub enum RamusError {
  /// The branch table or its resolved target is structurally invalid
  /// (missing default branch, empty condition, selected node absent from
  /// the workflow graph, unparseable task-parameter payload).
  #[error("{message}, please check the switch task configuration")]
  Configuration { message: String },

  /// A condition expression is malformed or cannot be evaluated against
  /// the parameter context.
  #[error("failed to evaluate switch condition `{expression}`. Source: {source}")]
  Evaluation {
    expression: String,
    #[source]
    source: AnyhowError,
  },
}

impl RamusError {
  /// Builds a `Configuration` error naming the structural defect.
  pub fn configuration(message: impl Into<String>) -> Self {
    RamusError::Configuration {
      message: message.into(),
    }
  }

  /// Wraps an external evaluator failure for `expression`.
  ///
  /// External `ConditionEvaluator` implementations use this to classify
  /// their own parse/evaluation failures without depending on the variant
  /// layout.
  pub fn evaluation(expression: impl Into<String>, source: impl Into<AnyhowError>) -> Self {
    RamusError::Evaluation {
      expression: expression.into(),
      source: source.into(),
    }
  }

  pub fn is_configuration(&self) -> bool {
    matches!(self, RamusError::Configuration { .. })
  }

  pub fn is_evaluation(&self) -> bool {
    matches!(self, RamusError::Evaluation { .. })
  }
}

pub type RamusResult<T, E = RamusError> = std::result::Result<T, E>;
