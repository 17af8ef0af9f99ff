use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use bridgetales_core::{ClientError, MemoryStore, SessionError, Session};

use super::{Scenario, ScenarioCtx};
use crate::scripted::{ScriptedApi, page};
use crate::util::now;

/// Server and input failures surface once and leave the story usable.
pub struct FailureScenario;

#[async_trait(?Send)]
impl Scenario for FailureScenario {
    fn name(&self) -> &'static str {
        "Error Handling"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let api = ScriptedApi::new();
        let store = MemoryStore::default();
        let mut ctl = ctx.controller(&api, &store);
        let theme = ctx.theme();

        let blank = ctl.generate("   ").await;
        ensure!(
            matches!(blank, Err(ClientError::Session(SessionError::EmptyTheme))),
            "blank theme should be rejected locally, got {blank:?}"
        );
        ensure!(api.calls().generate.is_empty(), "blank theme must not reach the server");

        api.reply_status(500, "Failed to generate story");
        let err = ctl
            .generate(theme)
            .await
            .err()
            .context("generate should fail")?;
        ensure!(
            err.banner() == "Error: Failed to generate story. Please try again.",
            "banner: {}",
            err.banner()
        );
        ensure!(ctl.session().is_empty(), "failed generate leaves no pages");
        ensure!(!ctl.session().is_pending(), "failed generate clears the pending request");

        api.reply_page(theme, "A fresh start.", &["Go on"]);
        ctl.generate(theme).await.context("retry by the reader")?;

        api.reply_status(503, "Failed to continue story");
        ensure!(
            ctl.continue_story("Go on", false, &now()).await.is_err(),
            "continue should fail"
        );
        ensure!(ctl.session().len() == 1, "failed continue keeps the story");
        ensure!(ctl.session().cursor() == 0, "failed continue keeps the cursor");

        api.reply_page(theme, "It worked the second time.", &[]);
        ctl.continue_story("Go on", false, &now())
            .await
            .context("continue after a failure")?;
        ensure!(ctl.session().len() == 2, "story grows after the failure");
        Ok(())
    }
}

/// Responses for a request the reader abandoned are discarded.
pub struct StaleScenario;

#[async_trait(?Send)]
impl Scenario for StaleScenario {
    fn name(&self) -> &'static str {
        "Stale Responses"
    }

    async fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        let theme = ctx.theme();
        let mut session = Session::new();

        let abandoned = session.begin_generate(theme)?;
        ensure!(
            matches!(session.begin_generate(theme), Err(SessionError::Busy)),
            "second request while one is pending"
        );
        session.reset();
        let late = session.complete(abandoned.id, &page(theme, "Too late.", &[]));
        ensure!(
            matches!(late, Err(SessionError::Stale(_))),
            "late response should be stale, got {late:?}"
        );
        ensure!(session.is_empty(), "stale response must not add a page");

        let current = session.begin_generate(theme)?;
        ensure!(current.id != abandoned.id, "request ids must not repeat");
        session.complete(current.id, &page(theme, "Right on time.", &["Next"]))?;

        let pending = session.begin_continue("Next", false)?;
        ensure!(
            matches!(session.fail(abandoned.id), Err(SessionError::Stale(_))),
            "an old failure must not clear the pending request"
        );
        ensure!(session.is_pending(), "continue is still pending");
        session.fail(pending.id)?;
        ensure!(session.len() == 1 && session.cursor() == 0, "failure keeps the page");
        Ok(())
    }
}
