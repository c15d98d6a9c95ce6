use dioxus::prelude::*;

use super::layout::{ErrorBox, InfoBox, Layout};
use super::{AnalysisView, NO_FEEDBACK_MESSAGE};
use crate::screens::Screen;
use crate::templates::render_document;

#[allow(non_snake_case)]
#[component]
fn AnalysisScreen(view: AnalysisView) -> Element {
    rsx! {
        Layout { title: "Analysis".to_string(), active: Screen::Analysis,
            h2 { class: "text-xl font-semibold mb-3", "Analysis Results" }
            if let Some(feedback) = &view.feedback {
                p { class: "text-gray-500 text-sm mb-2", "GPT's Analysis/Feedback:" }
                InfoBox { text: feedback.clone() }
            } else {
                ErrorBox { message: NO_FEEDBACK_MESSAGE.to_string() }
            }
            form { method: "POST", action: "/analysis/close",
                button {
                    r#type: "submit",
                    class: "py-2.5 px-4 border border-gray-300 bg-white rounded text-sm cursor-pointer hover:bg-gray-100",
                    "Close"
                }
            }
            if view.closed {
                p { class: "text-gray-700 mt-4", "Thank you for using Legal Help Case Assistant." }
            }
        }
    }
}

pub fn render_analysis(view: AnalysisView) -> String {
    render_document(VirtualDom::new_with_props(AnalysisScreen, AnalysisScreenProps { view }))
}
