use crate::log_mask;
use crate::reachability::{LayerOperator, WalkConfig};
use cancel_this::{Cancellable, is_cancelled};
use log::trace;

/// Extends every walk by one edge at its end: the next layer contains the unblocked
/// successors of the current layer.
pub struct ForwardLayer;

impl LayerOperator for ForwardLayer {
    fn step(context: &WalkConfig, layer: &[bool]) -> Cancellable<Vec<bool>> {
        let graph = &context.graph;
        let mut next = vec![false; layer.len()];
        for vertex in graph.vertices().filter(|v| layer[*v]) {
            is_cancelled!()?;
            for successor in graph.successors(vertex) {
                if context.is_allowed(successor) {
                    next[successor] = true;
                }
            }
        }
        trace!("Forward layer computed ({}).", log_mask(&next));
        Ok(next)
    }
}
