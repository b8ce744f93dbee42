use pokedex_core::types::RebuildPolicy;
use pokedex_core::types::config::SearchSettings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub rebuild_policy: RebuildPolicy,
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            rebuild_policy: settings.rebuild_policy,
        }
    }
}
