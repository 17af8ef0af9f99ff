use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use bridgetales_core::{
    ENDING_CHOICE, MemoryStore, StoryResponse, audio_url, choice_buttons, page_navigation,
    share_latest,
};

use super::{Scenario, ScenarioCtx};
use crate::scripted::{ScriptedApi, page};
use crate::util::now;

/// Generate a story, read the first page, take one choice.
pub struct SmokeScenario;

#[async_trait(?Send)]
impl Scenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "Smoke Test"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let api = ScriptedApi::new();
        let store = MemoryStore::default();
        let mut ctl = ctx.controller(&api, &store);
        let theme = ctx.theme();
        let opening = "The friends met in the park and planned an adventure.";

        api.reply(Ok(StoryResponse {
            voice_file: Some(String::from("story_audio.mp3")),
            ..page(theme, opening, &["Climb a tree", "Have a picnic"])
        }));
        ctl.generate(theme).await.context("generate")?;

        let session = ctl.session();
        ensure!(session.len() == 1, "expected one page, got {}", session.len());
        ensure!(session.cursor() == 0, "cursor should start on the first page");
        ensure!(page_navigation(session).is_none(), "single page needs no pager");

        let buttons = choice_buttons(session);
        ensure!(buttons.len() == 3, "two choices plus the ending, got {}", buttons.len());
        ensure!(
            buttons
                .last()
                .is_some_and(|b| b.is_ending && b.label == ENDING_CHOICE),
            "ending choice should come last"
        );

        let narration = session
            .voice_file()
            .map(|file| audio_url(&ctx.config.api_base_url, file));
        ensure!(
            narration.as_deref() == Some(ctx.config.endpoint("story_audio.mp3").as_str()),
            "narration should resolve against the API base, got {narration:?}"
        );

        let share = share_latest(session).context("newest page to share")?;
        ensure!(share.title == format!("A Story About {theme}"), "share title: {}", share.title);

        api.reply_page(theme, "They shared sandwiches under the oak.", &["Walk home"]);
        let book = ctl
            .continue_story("Have a picnic", false, &now())
            .await
            .context("continue")?;
        ensure!(book.is_none(), "a plain choice must not finish the book");
        ensure!(ctl.session().len() == 2 && ctl.session().cursor() == 1, "cursor follows the new page");
        ensure!(ctl.session().voice_file().is_none(), "narration belongs to the newest response");

        let calls = api.calls();
        ensure!(calls.generate.first().is_some_and(|r| r.theme == theme), "theme sent to the server");
        ensure!(
            calls
                .continue_
                .first()
                .is_some_and(|r| r.story_context == opening && r.choice == "Have a picnic"),
            "continue should carry the story so far"
        );
        Ok(())
    }
}
