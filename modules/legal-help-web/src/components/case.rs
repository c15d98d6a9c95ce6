use dioxus::prelude::*;

use legal_help_common::ValidationError;

use super::layout::{ErrorBox, InfoBox, Layout};
use super::CaseView;
use crate::screens::Screen;
use crate::templates::render_document;

#[allow(non_snake_case)]
#[component]
fn CaseScreen(view: CaseView) -> Element {
    rsx! {
        Layout { title: "Case".to_string(), active: Screen::Case,
            h2 { class: "text-xl font-semibold mb-1", "Case Scenario" }
            p { class: "text-gray-500 text-sm mb-2", "Generated Case Scenario:" }
            if let Some(scenario) = &view.scenario {
                InfoBox { text: scenario.clone() }
            } else {
                ErrorBox { message: ValidationError::NoScenario.to_string() }
            }
            if let Some(err) = &view.error {
                ErrorBox { message: err.clone() }
            }
            form { method: "POST", action: "/case",
                label { r#for: "solution", class: "block text-sm text-gray-500 mb-1",
                    "Submit Your Solution:"
                }
                textarea {
                    name: "solution", id: "solution", rows: "10",
                    class: "w-full px-3 py-2.5 border border-gray-300 rounded text-base mb-3",
                    "{view.solution}"
                }
                button {
                    r#type: "submit",
                    "data-busy": "Analyzing your solution...",
                    class: "py-2.5 px-4 bg-blue-600 text-white rounded text-sm font-medium cursor-pointer hover:bg-blue-800",
                    "Submit Solution"
                }
            }
        }
    }
}

pub fn render_case(view: CaseView) -> String {
    render_document(VirtualDom::new_with_props(CaseScreen, CaseScreenProps { view }))
}
