use dioxus::prelude::*;

use super::layout::{ErrorBox, Layout};
use super::HomeView;
use crate::screens::Screen;
use crate::templates::render_document;

/// Refill the city dropdown when the state changes. Without scripts the
/// "Update cities" button does the same through a GET round trip.
const LOCALITY_SCRIPT: &str = r#"(function () {
  var region = document.getElementById('region');
  var locality = document.getElementById('locality');
  if (!region || !locality) { return; }
  region.addEventListener('change', function () {
    fetch('/api/regions/' + encodeURIComponent(region.value) + '/localities')
      .then(function (res) { return res.ok ? res.json() : []; })
      .then(function (names) {
        locality.innerHTML = '';
        names.forEach(function (name) {
          var option = document.createElement('option');
          option.value = name;
          option.textContent = name;
          locality.appendChild(option);
        });
      });
  });
})();"#;

const SELECT_CLASS: &str = "w-full px-3 py-2.5 border border-gray-300 rounded text-base mb-4 bg-white";
const LABEL_CLASS: &str = "block text-sm text-gray-500 mb-1";

#[allow(non_snake_case)]
#[component]
fn HomeScreen(view: HomeView) -> Element {
    rsx! {
        Layout { title: "Home".to_string(), active: Screen::Home,
            h2 { class: "text-xl font-semibold mb-1", "Welcome to Legal Help" }
            p { class: "text-gray-500 text-sm mb-4",
                "Select a category to generate a case scenario and submit your solution for GPT's analysis."
            }
            if !view.api_key_configured {
                div { class: "bg-amber-50 border border-amber-200 text-amber-900 text-sm px-3 py-2 rounded mb-4",
                    "API Key not found. Case generation will fail until API_KEY is set."
                }
            }
            if let Some(err) = &view.error {
                ErrorBox { message: err.clone() }
            }
            form { method: "POST", action: "/home",
                label { r#for: "region", class: LABEL_CLASS, "Select State" }
                select { name: "region", id: "region", class: SELECT_CLASS,
                    for name in view.regions.iter() {
                        option { value: "{name}", selected: *name == view.region, "{name}" }
                    }
                }
                label { r#for: "locality", class: LABEL_CLASS, "Select City" }
                select { name: "locality", id: "locality", class: SELECT_CLASS,
                    for name in view.localities.iter() {
                        option { value: "{name}", selected: *name == view.locality, "{name}" }
                    }
                }
                label { r#for: "category", class: LABEL_CLASS, "Select Category" }
                select { name: "category", id: "category", class: SELECT_CLASS,
                    for name in view.categories.iter() {
                        option { value: "{name}", selected: *name == view.category, "{name}" }
                    }
                }
                label { r#for: "timeline", class: LABEL_CLASS, "Enter timeline (format YYYY-MM-DD)" }
                input {
                    r#type: "text", name: "timeline", id: "timeline",
                    value: "{view.timeline}",
                    placeholder: "YYYY-MM-DD",
                    class: "w-full px-3 py-2.5 border border-gray-300 rounded text-base mb-4",
                }
                div { class: "flex gap-3",
                    button {
                        r#type: "submit",
                        "formaction": "/home",
                        "formmethod": "get",
                        class: "py-2.5 px-4 border border-gray-300 bg-white rounded text-sm cursor-pointer hover:bg-gray-100",
                        "Update cities"
                    }
                    button {
                        r#type: "submit",
                        "data-busy": "Generating case scenario...",
                        class: "py-2.5 px-4 bg-blue-600 text-white rounded text-sm font-medium cursor-pointer hover:bg-blue-800",
                        "Continue"
                    }
                }
            }
            script { dangerous_inner_html: LOCALITY_SCRIPT }
        }
    }
}

pub fn render_home(view: HomeView) -> String {
    render_document(VirtualDom::new_with_props(HomeScreen, HomeScreenProps { view }))
}
