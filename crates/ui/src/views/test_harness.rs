use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chainlab_core::model::Workbench;
use chainlab_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{PackCatalog, PlayService, RevealDelays};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, PlaygroundView, QuizView, WorkbenchView};
use crate::vm::{BenchIntent, RunIntent, RunVm, WorkbenchVm};

#[derive(Clone)]
struct TestApp {
    catalog: PackCatalog,
    play: PlayService,
    delays: RevealDelays,
    workbench: Workbench,
}

impl UiApp for TestApp {
    fn catalog(&self) -> PackCatalog {
        self.catalog.clone()
    }

    fn play(&self) -> PlayService {
        self.play
    }

    fn delays(&self) -> RevealDelays {
        self.delays
    }

    fn workbench(&self) -> Workbench {
        self.workbench.clone()
    }
}

/// Lets a test reach the dispatch callback and view-model signal that a
/// run view (quiz or playground) registers when mounted under the harness.
#[derive(Clone, Default)]
pub(crate) struct RunTestHandles {
    dispatch: Rc<RefCell<Option<Callback<RunIntent>>>>,
    vm: Rc<RefCell<Option<Signal<RunVm>>>>,
}

impl RunTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<RunIntent>, vm: Signal<RunVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<RunIntent> {
        (*self.dispatch.borrow()).expect("run dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<RunVm> {
        (*self.vm.borrow()).expect("run vm registered")
    }
}

#[derive(Clone, Default)]
pub(crate) struct BenchTestHandles {
    dispatch: Rc<RefCell<Option<Callback<BenchIntent>>>>,
    vm: Rc<RefCell<Option<Signal<WorkbenchVm>>>>,
}

impl BenchTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<BenchIntent>, vm: Signal<WorkbenchVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<BenchIntent> {
        (*self.dispatch.borrow()).expect("bench dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<WorkbenchVm> {
        (*self.vm.borrow()).expect("bench vm registered")
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Playground,
    Workbench,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    run_handles: RunTestHandles,
    bench_handles: BenchTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.run_handles.clone());
    use_context_provider(|| props.bench_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Playground => rsx! { PlaygroundView {} },
        ViewKind::Workbench => rsx! { WorkbenchView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub run_handles: RunTestHandles,
    pub bench_handles: BenchTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let catalog = PackCatalog::built_in().expect("shipped packs validate");
    let play = PlayService::new(fixed_clock());
    let workbench =
        services::content::contract::workbench().expect("shipped contract validates");

    let run_handles = RunTestHandles::default();
    let bench_handles = BenchTestHandles::default();

    let app = Arc::new(TestApp {
        catalog,
        play,
        delays: RevealDelays::none(),
        workbench,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            run_handles: run_handles.clone(),
            bench_handles: bench_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        run_handles,
        bench_handles,
    }
}
