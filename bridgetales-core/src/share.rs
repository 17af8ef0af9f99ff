use crate::page::StoryPage;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContent {
    pub title: String,
    pub text: String,
}

/// Share payload for `page`.
#[must_use]
pub fn share_content(page: &StoryPage) -> ShareContent {
    ShareContent {
        title: format!("A Story About {}", page.theme),
        text: format!(
            "Check out this AI-generated story about \"{}\":\n\n{}",
            page.theme, page.story
        ),
    }
}

/// Share payload for a session: always the newest page, whichever page the
/// reader is looking at.
#[must_use]
pub fn share_latest(session: &Session) -> Option<ShareContent> {
    session.pages().last().map(share_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_title_and_text() {
        let page = StoryPage {
            story: String::from("Once upon a time."),
            theme: String::from("kindness"),
            ..StoryPage::default()
        };
        let content = share_content(&page);
        assert_eq!(content.title, "A Story About kindness");
        assert_eq!(
            content.text,
            "Check out this AI-generated story about \"kindness\":\n\nOnce upon a time."
        );
    }

    #[test]
    fn shares_newest_page_even_after_paging_back() {
        use crate::page::StoryResponse;
        use crate::session::Direction;

        let mut session = Session::new();
        assert_eq!(share_latest(&session), None);
        for (index, story) in ["Page one.", "Page two."].into_iter().enumerate() {
            let id = if index == 0 {
                session.begin_generate("kindness").unwrap().id
            } else {
                session.begin_continue("Next", false).unwrap().id
            };
            let response = StoryResponse {
                story: story.to_string(),
                theme: String::from("kindness"),
                ..StoryResponse::default()
            };
            session.complete(id, &response).unwrap();
        }
        session.navigate(Direction::Previous);
        assert_eq!(session.cursor(), 0);
        let content = share_latest(&session).unwrap();
        assert!(content.text.ends_with("Page two."));
    }
}
