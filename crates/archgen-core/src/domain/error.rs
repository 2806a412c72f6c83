//! Domain error types.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may retain them across best-effort steps)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown architecture style: {0}")]
    UnknownStyle(String),

    #[error("invalid solution name '{name}': {reason}")]
    InvalidSolutionName { name: String, reason: String },

    // ========================================================================
    // Layer Graph Errors
    // ========================================================================
    /// A layer references itself. Never true for the shipped styles; guards
    /// future style tables.
    #[error("layer '{layer}' references itself")]
    SelfReference { layer: String },

    /// A layer references a suffix that is not part of its style's table.
    #[error("layer '{layer}' references unknown layer '{reference}'")]
    UnknownLayerReference { layer: String, reference: String },

    /// The layer edges contain a cycle, so no generation order exists.
    #[error("dependency cycle among layers: {}", unresolved.join(", "))]
    DependencyCycle { unresolved: Vec<String> },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownStyle(style) => vec![
                format!("'{}' is not a built-in style", style),
                "Available styles: nlayer, onion".into(),
                "Example: archgen nlayer MyProject".into(),
            ],
            Self::InvalidSolutionName { name, reason } => vec![
                format!("Solution name '{}' is invalid: {}", name, reason),
                "Use a plain name like 'Acme' or 'MyShop'".into(),
            ],
            Self::SelfReference { .. }
            | Self::UnknownLayerReference { .. }
            | Self::DependencyCycle { .. } => vec![
                "The built-in layer tables are broken — this is a bug".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownStyle(_) | Self::InvalidSolutionName { .. } => ErrorCategory::Validation,
            Self::SelfReference { .. }
            | Self::UnknownLayerReference { .. }
            | Self::DependencyCycle { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
