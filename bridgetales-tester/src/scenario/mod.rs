use anyhow::Result;
use async_trait::async_trait;
use bridgetales_core::{ClientConfig, MemoryStore, QUICK_THEMES, StoryController};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::scripted::ScriptedApi;

pub mod failure;
pub mod overlay;
pub mod reader;
pub mod smoke;
pub mod story;

pub type ScriptedController = StoryController<ScriptedApi, MemoryStore>;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub config: ClientConfig,
    pub seed: u64,
}

impl ScenarioCtx {
    #[must_use]
    pub const fn new(config: ClientConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// A fresh controller over `api` and `store`, seeded for this run.
    #[must_use]
    pub fn controller(&self, api: &ScriptedApi, store: &MemoryStore) -> ScriptedController {
        StoryController::new(api.clone(), store.clone(), self.config.clone(), self.seed)
    }

    /// The quick theme this seed plays with.
    #[must_use]
    pub fn theme(&self) -> &'static str {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        QUICK_THEMES.choose(&mut rng).copied().unwrap_or("kindness")
    }
}

/// One scripted walk through the client. Scenarios own their server script
/// and fail with the first broken expectation.
#[async_trait(?Send)]
pub trait Scenario {
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()>;
}

/// Scenario keys in the order `all` runs them.
pub const ALL_SCENARIOS: [&str; 8] = [
    "smoke",
    "navigation",
    "failure",
    "stale",
    "ending",
    "profile",
    "nearby",
    "overlay",
];

pub fn get_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "navigation" | "nav" => Some(Box::new(story::NavigationScenario)),
        "ending" | "library" => Some(Box::new(story::EndingScenario)),
        "failure" | "errors" => Some(Box::new(failure::FailureScenario)),
        "stale" => Some(Box::new(failure::StaleScenario)),
        "profile" => Some(Box::new(reader::ProfileScenario)),
        "nearby" | "location" => Some(Box::new(reader::NearbyScenario)),
        "overlay" | "overlays" => Some(Box::new(overlay::OverlayScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    ALL_SCENARIOS
        .iter()
        .filter_map(|key| get_scenario(key).map(|scenario| (*key, scenario.name())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_key_resolves() {
        let listed = list_scenarios();
        assert_eq!(listed.len(), ALL_SCENARIOS.len());
        assert!(listed.iter().any(|(key, name)| *key == "smoke" && *name == "Smoke Test"));
        assert!(get_scenario("NAV").is_some());
        assert!(get_scenario("unknown").is_none());
    }

    #[test]
    fn theme_is_a_quick_theme_and_stable_per_seed() {
        let ctx = ScenarioCtx::new(ClientConfig::default(), 1337);
        assert!(QUICK_THEMES.contains(&ctx.theme()));
        assert_eq!(ctx.theme(), ctx.theme());
    }

    #[tokio::test]
    async fn all_scenarios_pass_against_the_scripted_server() {
        for seed in [1, 42, 1337] {
            let ctx = ScenarioCtx::new(ClientConfig::default(), seed);
            for key in ALL_SCENARIOS {
                let scenario = get_scenario(key).unwrap();
                if let Err(err) = scenario.run(&ctx).await {
                    panic!("{key} failed for seed {seed}: {err:#}");
                }
            }
        }
    }
}
