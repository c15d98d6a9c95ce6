use dioxus::prelude::*;

use super::layout::{ErrorBox, Layout};
use crate::screens::Screen;
use crate::templates::render_document;

#[allow(non_snake_case)]
#[component]
fn FailurePage(screen: Screen) -> Element {
    let back = screen.path();
    rsx! {
        Layout { title: "Error".to_string(), active: screen,
            ErrorBox { message: "Something went wrong while contacting the language model.".to_string() }
            a { href: back, class: "text-blue-600 hover:underline text-sm", "Back" }
        }
    }
}

/// Generic page for a failed model call.
pub fn render_failure(screen: Screen) -> String {
    render_document(VirtualDom::new_with_props(FailurePage, FailurePageProps { screen }))
}
