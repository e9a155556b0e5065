use crate::reachability::{WalkConfig, WalkProfile};

/// Layers computed so far. `layers[t][v]` is set iff some walk of exactly `t` edges
/// ends in `v`. Only nonempty layers are stored.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkState {
    pub iteration: usize,
    pub layers: Vec<Vec<bool>>,
}

impl From<&WalkConfig> for WalkState {
    fn from(value: &WalkConfig) -> Self {
        let unblocked: Vec<bool> = value.blocked.iter().map(|it| !*it).collect();
        let layers = if unblocked.iter().any(|it| *it) {
            vec![unblocked]
        } else {
            Vec::new()
        };
        WalkState {
            iteration: 0,
            layers,
        }
    }
}

impl WalkState {
    pub(crate) fn to_profile(&self, truncated: bool) -> WalkProfile {
        WalkProfile {
            layers: self.layers.clone(),
            truncated,
        }
    }
}
