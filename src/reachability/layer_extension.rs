use crate::reachability::{LayerOperator, WalkConfig, WalkProfile, WalkState};
use crate::{log_mask, simple_type_name};
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::debug;
use std::marker::PhantomData;

/// A helper implementation of [`ComputationStep`] that repeatedly calls a [`LayerOperator`],
/// appending each new nonempty layer to the current `state`.
pub struct LayerExtension<S: LayerOperator>(PhantomData<S>);

impl<S: LayerOperator> ComputationStep<WalkConfig, WalkState, WalkProfile> for LayerExtension<S> {
    fn step(context: &WalkConfig, state: &mut WalkState) -> Completable<WalkProfile> {
        let Some(last) = state.layers.last() else {
            debug!(
                "[iteration:{}] Layers<{}> finished (no unblocked vertices).",
                state.iteration,
                simple_type_name::<S>()
            );
            return Ok(state.to_profile(false));
        };

        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] Layers<{}> truncated (exceeded iteration count).",
                state.iteration,
                simple_type_name::<S>()
            );
            return Ok(state.to_profile(true));
        }

        let next = S::step(context, last)?;
        state.iteration += 1;
        if next.iter().any(|it| *it) {
            debug!(
                "[iteration:{}] Layers<{}> extended with ({}).",
                state.iteration,
                simple_type_name::<S>(),
                log_mask(&next)
            );
            state.layers.push(next);
            Err(Suspended)
        } else {
            debug!(
                "[iteration:{}] Layers<{}> finished with {} layers.",
                state.iteration,
                simple_type_name::<S>(),
                state.layers.len()
            );
            Ok(state.to_profile(false))
        }
    }
}
