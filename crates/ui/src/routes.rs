use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, PlaygroundView, QuizView, WorkbenchView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/playground", PlaygroundView)] Playground {},
        #[route("/workbench", WorkbenchView)] Workbench {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "ChainLab" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Quiz {}, "Knowledge Quiz" } }
                li { Link { to: Route::Playground {}, "Code Playground" } }
                li { Link { to: Route::Workbench {}, "Contract Workbench" } }
            }
        }
    }
}
