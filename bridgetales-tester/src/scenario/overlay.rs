use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use bridgetales_core::{MemoryStore, OverlayCategory, OverlaySlot, overlays_for};

use super::{Scenario, ScenarioCtx};
use crate::scripted::ScriptedApi;
use crate::util::now;

/// Story text drives the "visit this place" prompts on each page.
pub struct OverlayScenario;

const PAGES: [(&str, &[OverlayCategory]); 3] = [
    (
        "They shared a snack at the cafe, then ran to the park.",
        &[OverlayCategory::Food, OverlayCategory::Park],
    ),
    ("A dragon sneezed glitter everywhere.", &[OverlayCategory::Generic]),
    (
        "After the food fair they visited the library, the garden, the market and the playground.",
        &[
            OverlayCategory::Food,
            OverlayCategory::Park,
            OverlayCategory::Library,
        ],
    ),
];

#[async_trait(?Send)]
impl Scenario for OverlayScenario {
    fn name(&self) -> &'static str {
        "Story Overlays"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let api = ScriptedApi::new();
        let store = MemoryStore::default();
        let mut ctl = ctx.controller(&api, &store);
        let theme = ctx.theme();

        for (index, (text, expected)) in PAGES.iter().enumerate() {
            api.reply_page(theme, text, &["Next"]);
            if index == 0 {
                ctl.generate(theme).await.context("generate")?;
            } else {
                ctl.continue_story("Next", false, &now())
                    .await
                    .context("continue")?;
            }
            let page = ctl.session().current().context("current page")?;
            let overlays = overlays_for(&page.story);
            let categories: Vec<_> = overlays.iter().map(|o| o.category).collect();
            ensure!(
                categories.as_slice() == *expected,
                "page {}: expected {expected:?}, got {categories:?}",
                index + 1
            );
            for (overlay, slot) in overlays.iter().zip(OverlaySlot::LAYOUT) {
                ensure!(overlay.slot == slot, "overlay slots fill in layout order");
            }
        }
        Ok(())
    }
}
