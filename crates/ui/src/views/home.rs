use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let workbench = ctx.workbench();
    let quiz_count = catalog.quiz().len();
    let level_count = catalog.code().len();
    let contract_name = workbench.contract().name().to_string();

    rsx! {
        div { class: "page home-page",
            h2 { "Welcome to ChainLab" }
            p { class: "home-intro",
                "Learn how blockchains work by playing: answer questions, write code, and run a contract."
            }
            div { class: "home-cards",
                div { class: "home-card",
                    h3 { "Knowledge Quiz" }
                    p { "{quiz_count} questions on chain setup, consoles, and middleware." }
                    Link { class: "home-card__cta", to: Route::Quiz {}, "Start the quiz" }
                }
                div { class: "home-card",
                    h3 { "Code Playground" }
                    p { "{level_count} Java levels, from Hello World to classes." }
                    Link { class: "home-card__cta", to: Route::Playground {}, "Start coding" }
                }
                div { class: "home-card",
                    h3 { "Contract Workbench" }
                    p { "Compile, deploy, and vote with {contract_name} in a simulated network." }
                    Link { class: "home-card__cta", to: Route::Workbench {}, "Open the workbench" }
                }
            }
        }
    }
}
