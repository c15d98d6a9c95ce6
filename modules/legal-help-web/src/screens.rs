/// The three screens reachable from the sidebar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Case,
    Analysis,
}

impl Screen {
    /// Menu order.
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Case, Screen::Analysis];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Case => "Case",
            Screen::Analysis => "Analysis",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Case => "/case",
            Screen::Analysis => "/analysis",
        }
    }

    /// Where a successful submit on this screen leads.
    pub fn after_success(self) -> Screen {
        match self {
            Screen::Home => Screen::Case,
            Screen::Case | Screen::Analysis => Screen::Analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_steps_move_forward() {
        assert_eq!(Screen::Home.after_success(), Screen::Case);
        assert_eq!(Screen::Case.after_success(), Screen::Analysis);
        assert_eq!(Screen::Analysis.after_success(), Screen::Analysis);
    }

    #[test]
    fn menu_order_and_labels() {
        let labels: Vec<_> = Screen::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "Case", "Analysis"]);
    }

    #[test]
    fn paths_are_distinct() {
        assert_eq!(Screen::Home.path(), "/");
        assert_eq!(Screen::Case.path(), "/case");
        assert_eq!(Screen::Analysis.path(), "/analysis");
    }
}
