use dioxus::prelude::*;

use crate::screens::Screen;

pub const APP_TITLE: &str = "Legal Help Case Assistant";

/// Disable submit buttons while a request is in flight and swap in their
/// busy label; model calls take a while and the page blocks until they end.
const BUSY_SCRIPT: &str = r#"document.querySelectorAll('form').forEach(function (form) {
  form.addEventListener('submit', function (event) {
    var button = event.submitter;
    if (button && button.dataset.busy) {
      button.textContent = button.dataset.busy;
      setTimeout(function () { button.disabled = true; }, 0);
    }
  });
});"#;

/// Page shell with the sidebar menu.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, active: Screen, children: Element) -> Element {
    let full_title = format!("{title} | {APP_TITLE}");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "flex min-h-screen bg-gray-50 font-sans text-gray-900",
            div { class: "w-56 bg-gray-900 text-white flex flex-col shrink-0 fixed inset-y-0 left-0 z-50",
                div { class: "px-5 py-4 text-lg font-semibold border-b border-gray-700",
                    "Menu"
                }
                nav { class: "flex flex-col py-3",
                    for screen in Screen::ALL {
                        {
                            let class = if screen == active {
                                "block px-5 py-2.5 text-sm text-white bg-blue-600"
                            } else {
                                "block px-5 py-2.5 text-sm text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                            };
                            let href = screen.path();
                            let label = screen.label();
                            rsx! { a { href: href, class: class, "{label}" } }
                        }
                    }
                }
            }
            div { class: "ml-56 flex-1 min-w-0",
                div { class: "max-w-3xl mx-auto p-6",
                    h1 { class: "text-2xl font-bold mb-6", "{APP_TITLE}" }
                    {children}
                }
            }
            script { dangerous_inner_html: BUSY_SCRIPT }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ErrorBox(message: String) -> Element {
    rsx! {
        div { class: "bg-red-50 border border-red-200 text-red-800 text-sm px-3 py-2 rounded mb-4",
            "role": "alert",
            "{message}"
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn InfoBox(text: String) -> Element {
    rsx! {
        div { class: "bg-blue-50 border border-blue-200 text-blue-900 px-4 py-3 rounded mb-4 whitespace-pre-wrap",
            "{text}"
        }
    }
}
