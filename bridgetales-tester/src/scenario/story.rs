use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use bridgetales_core::{
    ClientError, Direction, ENDING_CHOICE, LibraryStore, MemoryStore, SessionError, UserProfile,
    Voice, choice_buttons, page_navigation,
};

use super::{Scenario, ScenarioCtx, ScriptedController};
use crate::scripted::ScriptedApi;
use crate::util::now;

async fn three_pages(ctl: &mut ScriptedController, api: &ScriptedApi, theme: &str) -> Result<()> {
    api.reply_page(theme, "Page one.", &["Onward"]);
    ctl.generate(theme).await.context("generate")?;
    api.reply_page(theme, "Page two.", &["Onward"]);
    ctl.continue_story("Onward", false, &now()).await.context("second page")?;
    api.reply_page(theme, "Page three.", &["Onward", "Rest"]);
    ctl.continue_story("Onward", false, &now()).await.context("third page")?;
    Ok(())
}

/// Page back and forth through a three-page story.
pub struct NavigationScenario;

#[async_trait(?Send)]
impl Scenario for NavigationScenario {
    fn name(&self) -> &'static str {
        "Page Navigation"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let api = ScriptedApi::new();
        let store = MemoryStore::default();
        let mut ctl = ctx.controller(&api, &store);
        three_pages(&mut ctl, &api, ctx.theme()).await?;

        ensure!(!ctl.navigate(Direction::Next), "next on the last page must not move");
        ensure!(ctl.navigate(Direction::Previous), "previous should move back");
        ensure!(ctl.session().cursor() == 1, "cursor should be on page two");
        ensure!(choice_buttons(ctl.session()).is_empty(), "old pages hide the choices");

        ctl.navigate(Direction::Previous);
        ensure!(!ctl.navigate(Direction::Previous), "previous on the first page must not move");
        let nav = page_navigation(ctl.session()).context("pager for three pages")?;
        ensure!(nav.indicator == "Page 1 of 3", "indicator: {}", nav.indicator);
        ensure!(!nav.can_go_back && nav.can_go_forward, "pager edges on the first page");

        ctl.navigate(Direction::Next);
        ctl.navigate(Direction::Next);
        let buttons = choice_buttons(ctl.session());
        ensure!(buttons.len() == 3, "newest page offers its choices again");
        ensure!(
            ctl.session().current().is_some_and(|p| p.story == "Page three."),
            "cursor should be back on the newest page"
        );
        Ok(())
    }
}

/// Finish two books and read them back from the library.
pub struct EndingScenario;

#[async_trait(?Send)]
impl Scenario for EndingScenario {
    fn name(&self) -> &'static str {
        "Happy Ending and Library"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let store = MemoryStore::default();
        store.save_profile(&UserProfile::new("Mia", 7, Voice::Kevin)?)?;
        let theme = ctx.theme();

        let api = ScriptedApi::new();
        let mut ctl = ctx.controller(&api, &store);
        api.reply_page(theme, "Once upon a time.", &["Keep going"]);
        ctl.generate(theme).await.context("generate")?;
        api.reply_page(theme, "And they all lived happily ever after.", &[]);
        let first = ctl
            .continue_story(ENDING_CHOICE, true, &now())
            .await
            .context("ending")?
            .context("the ending should file a book")?;
        ensure!(first.page_count() == 2, "book pages: {}", first.page_count());
        ensure!(first.theme == theme, "book theme: {}", first.theme);
        ensure!(first.user_name.as_deref() == Some("Mia"), "book should name the reader");
        ensure!(api.calls().books.len() == 1, "book mirrored to the server");
        ensure!(
            choice_buttons(ctl.session()).is_empty(),
            "an ended story offers no further choices"
        );
        ensure!(
            matches!(
                ctl.continue_story(ENDING_CHOICE, true, &now()).await,
                Err(ClientError::Session(SessionError::Finished))
            ),
            "an ended story cannot end twice"
        );
        ensure!(store.load_books()?.len() == 1, "one book per finished story");
        ensure!(
            api.calls().continue_.first().is_some_and(|r| r.is_ending),
            "ending flag sent to the server"
        );

        let offline = ScriptedApi::rejecting_books();
        let next_run = ScenarioCtx {
            seed: ctx.seed.wrapping_add(1),
            ..ctx.clone()
        };
        let mut ctl = next_run.controller(&offline, &store);
        three_pages(&mut ctl, &offline, theme).await?;
        offline.reply_page(theme, "The end.", &[]);
        let second = ctl
            .continue_story(ENDING_CHOICE, true, &now())
            .await
            .context("ending with the server copy failing")?
            .context("the ending should still file a book")?;
        ensure!(second.id != first.id, "book ids must differ");

        let library = ctl.library()?;
        ensure!(library.len() == 2, "library holds {} books", library.len());
        ensure!(
            library.first().is_some_and(|book| book.id == second.id),
            "newest book is listed first"
        );
        Ok(())
    }
}
