use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use bridgetales_core::{Business, Coordinates, LibraryStore, MemoryStore, UserProfile, Voice};

use super::{Scenario, ScenarioCtx};
use crate::scripted::ScriptedApi;

/// Save a profile, tell the story with it, then log out.
pub struct ProfileScenario;

#[async_trait(?Send)]
impl Scenario for ProfileScenario {
    fn name(&self) -> &'static str {
        "Reader Profile"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let api = ScriptedApi::new();
        let store = MemoryStore::default();
        let mut ctl = ctx.controller(&api, &store);
        let theme = ctx.theme();

        let profile = UserProfile::new("  Noor ", 9, Voice::Joanna)?;
        ctl.save_profile(profile.clone()).await.context("save profile")?;
        ensure!(ctl.profile() == Some(&profile), "controller keeps the saved profile");
        ensure!(store.load_profile()?.as_ref() == Some(&profile), "profile stored locally");
        ensure!(api.calls().profiles.len() == 1, "profile sent to the server");

        api.reply_page(theme, "Noor found a map.", &["Follow it"]);
        ctl.generate(theme).await.context("generate with profile")?;
        {
            let calls = api.calls();
            let request = calls.generate.last().context("generate request")?;
            ensure!(request.voice == Some(Voice::Joanna), "voice: {:?}", request.voice);
            ensure!(request.age == Some(9), "age: {:?}", request.age);
        }

        let restored = ctx.controller(&api, &store);
        ensure!(restored.profile() == Some(&profile), "profile restored on start");

        ctl.logout().context("logout")?;
        ensure!(ctl.profile().is_none(), "logout forgets the profile");
        ensure!(store.load_profile()?.is_none(), "logout clears local storage");

        api.reply_page(theme, "Someone found a map.", &["Follow it"]);
        ctl.generate(theme).await.context("generate without profile")?;
        let calls = api.calls();
        let request = calls.generate.last().context("generate request")?;
        ensure!(request.voice.is_none() && request.age.is_none(), "anonymous request");
        Ok(())
    }
}

/// Places related to the story, with and without a browser position.
pub struct NearbyScenario;

#[async_trait(?Send)]
impl Scenario for NearbyScenario {
    fn name(&self) -> &'static str {
        "Nearby Places"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let api = ScriptedApi::new();
        let store = MemoryStore::default();
        let mut ctl = ctx.controller(&api, &store);
        let theme = ctx.theme();
        api.set_places(
            (1..=8)
                .map(|i| Business {
                    name: format!("Place {i}"),
                    distance: Some(f64::from(i) * 250.0),
                    ..Business::default()
                })
                .collect(),
        );

        api.reply_page(theme, "They stopped at a bakery.", &["Buy bread"]);
        ctl.generate(theme).await.context("generate")?;

        let places = ctl.find_nearby(None).await.context("nearby without position")?;
        let limit = usize::try_from(ctx.config.nearby_max_results)?;
        ensure!(places.len() == limit.min(8), "places: {}", places.len());

        let here = Coordinates::checked(51.5072, -0.1276).context("valid coordinates")?;
        ctl.find_nearby(Some(here)).await.context("nearby with position")?;

        let calls = api.calls();
        let fallback = calls.nearby.first().context("first nearby request")?;
        let fallback_at = ctx.config.default_coordinates;
        ensure!(
            (fallback.latitude - fallback_at.latitude).abs() < f64::EPSILON
                && (fallback.longitude - fallback_at.longitude).abs() < f64::EPSILON,
            "fallback position: {}, {}",
            fallback.latitude,
            fallback.longitude
        );
        ensure!(
            fallback.story_context == "They stopped at a bakery.",
            "story context: {}",
            fallback.story_context
        );
        let located = calls.nearby.get(1).context("second nearby request")?;
        ensure!(
            (located.latitude - here.latitude).abs() < f64::EPSILON,
            "reported position should be used"
        );
        Ok(())
    }
}
