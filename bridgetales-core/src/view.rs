//! Typed records the UI renders for the reader panel.

use crate::session::Session;

/// Choice text sent when the reader asks for the story to wrap up.
pub const ENDING_CHOICE: &str = "Bring the story to a happy ending";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceButton {
    pub label: String,
    pub is_ending: bool,
}

/// Buttons for the page on screen: the page's choices followed by the ending
/// button. Empty unless the cursor is on the newest page of a story that has
/// not ended yet.
#[must_use]
pub fn choice_buttons(session: &Session) -> Vec<ChoiceButton> {
    if !session.shows_choices() {
        return Vec::new();
    }
    let Some(page) = session.current() else {
        return Vec::new();
    };
    page.choices
        .iter()
        .map(|choice| ChoiceButton {
            label: choice.clone(),
            is_ending: false,
        })
        .chain(std::iter::once(ChoiceButton {
            label: ENDING_CHOICE.to_string(),
            is_ending: true,
        }))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigation {
    pub indicator: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Pager state, or `None` when the story has a single page.
#[must_use]
pub fn page_navigation(session: &Session) -> Option<PageNavigation> {
    let total = session.len();
    if total <= 1 {
        return None;
    }
    let cursor = session.cursor();
    Some(PageNavigation {
        indicator: format!("Page {} of {total}", cursor + 1),
        can_go_back: cursor > 0,
        can_go_forward: cursor + 1 < total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::StoryResponse;
    use crate::session::Direction;

    fn respond(session: &mut Session, id: crate::session::RequestId, story: &str, choices: &[&str]) {
        let response = StoryResponse {
            story: story.to_string(),
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            theme: String::from("pirates"),
            ..StoryResponse::default()
        };
        session.complete(id, &response).unwrap();
    }

    #[test]
    fn first_page_shows_choices_plus_ending_and_no_pager() {
        let mut session = Session::new();
        let ticket = session.begin_generate("pirates").unwrap();
        respond(&mut session, ticket.id, "Ahoy.", &["Fight", "Flee"]);

        let buttons = choice_buttons(&session);
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons[0].label, "Fight");
        assert_eq!(buttons[1].label, "Flee");
        assert!(buttons[2].is_ending);
        assert_eq!(page_navigation(&session), None);
    }

    #[test]
    fn earlier_pages_hide_choices_and_pager_tracks_cursor() {
        let mut session = Session::new();
        let ticket = session.begin_generate("pirates").unwrap();
        respond(&mut session, ticket.id, "Ahoy.", &["Fight", "Flee"]);
        let ticket = session.begin_continue("Fight", false).unwrap();
        respond(&mut session, ticket.id, "Clash.", &["Win"]);

        let nav = page_navigation(&session).unwrap();
        assert_eq!(nav.indicator, "Page 2 of 2");
        assert!(nav.can_go_back);
        assert!(!nav.can_go_forward);

        session.navigate(Direction::Previous);
        assert!(choice_buttons(&session).is_empty());
        let nav = page_navigation(&session).unwrap();
        assert_eq!(nav.indicator, "Page 1 of 2");
        assert!(!nav.can_go_back);
        assert!(nav.can_go_forward);

        session.navigate(Direction::Next);
        assert_eq!(choice_buttons(&session).len(), 2);
    }

    #[test]
    fn ended_story_offers_no_buttons() {
        let mut session = Session::new();
        let ticket = session.begin_generate("pirates").unwrap();
        respond(&mut session, ticket.id, "Ahoy.", &["Fight"]);
        let ticket = session.begin_continue(ENDING_CHOICE, true).unwrap();
        respond(&mut session, ticket.id, "Home again.", &[]);

        assert!(choice_buttons(&session).is_empty());
        assert_eq!(page_navigation(&session).map(|nav| nav.indicator), Some(String::from("Page 2 of 2")));
    }

    #[test]
    fn empty_session_has_no_buttons() {
        assert!(choice_buttons(&Session::new()).is_empty());
    }
}
