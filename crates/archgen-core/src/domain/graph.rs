//! Layer dependency graph: edge validation and topological ordering.
//!
//! The registry's declaration order already satisfies topological order for
//! both shipped styles; this module exists so that the invariant is *checked*
//! rather than assumed, and so that any future style table with a cycle fails
//! with [`DomainError::DependencyCycle`] instead of generating projects whose
//! references point at nothing.

use crate::domain::error::DomainError;
use crate::domain::layer::LayerSpec;

/// Validate the `project_refs` edges of a layer table.
///
/// Rejects self-loops and references to suffixes outside the table. Runs
/// before ordering so that `order` can treat every edge as resolvable.
pub fn validate_edges(layers: &[LayerSpec]) -> Result<(), DomainError> {
    for layer in layers {
        for reference in layer.project_refs {
            if *reference == layer.suffix {
                return Err(DomainError::SelfReference {
                    layer: layer.suffix.to_string(),
                });
            }
            if !layers.iter().any(|l| l.suffix == *reference) {
                return Err(DomainError::UnknownLayerReference {
                    layer: layer.suffix.to_string(),
                    reference: reference.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Order layers so every layer appears after all layers it references.
///
/// Standard topological sort by repeated removal of zero-indegree nodes.
/// Ties (multiple removable layers) are broken by declaration position, which
/// keeps the output deterministic and — for the two shipped styles — equal to
/// the declared order.
pub fn order(layers: &[LayerSpec]) -> Result<Vec<&LayerSpec>, DomainError> {
    validate_edges(layers)?;

    let mut ordered = Vec::with_capacity(layers.len());
    let mut placed = vec![false; layers.len()];

    while ordered.len() < layers.len() {
        // First unplaced layer whose references are all placed. Scanning from
        // index 0 every round is the declaration-order tie-break.
        let next = layers.iter().enumerate().position(|(i, layer)| {
            !placed[i]
                && layer.project_refs.iter().all(|reference| {
                    layers
                        .iter()
                        .position(|l| l.suffix == *reference)
                        .is_some_and(|j| placed[j])
                })
        });

        match next {
            Some(i) => {
                placed[i] = true;
                ordered.push(&layers[i]);
            }
            None => {
                let unresolved = layers
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !placed[*i])
                    .map(|(_, l)| l.suffix.to_string())
                    .collect();
                return Err(DomainError::DependencyCycle { unresolved });
            }
        }
    }

    Ok(ordered)
}
