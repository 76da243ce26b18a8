use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lesson_core::time::fixed_clock;
use services::{AppServices, NoSpeech};
use storage::repository::Storage;
use tokio::sync::watch;

use crate::context::{UiApp, build_app_context};
use crate::speech::WebSpeech;
use crate::views::{
    AlphabetWordsView, AlphabetsView, HomeView, NumbersView, RhymeListView, RhymeView,
    SpellingListView, SpellingWordView,
};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    bridge: Option<WebSpeech>,
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn speech_bridge(&self) -> Option<WebSpeech> {
        self.bridge.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Alphabets,
    AlphabetWords,
    Numbers,
    Rhymes,
    Rhyme(String),
    /// Rhyme page whose id follows a channel fed by the test.
    RhymeFollowing,
    Spelling,
    SpellingWord(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    rhyme_ids: Option<watch::Receiver<String>>,
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
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.rhyme_ids.clone());
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
        ViewKind::Alphabets => rsx! { AlphabetsView {} },
        ViewKind::AlphabetWords => rsx! { AlphabetWordsView {} },
        ViewKind::Numbers => rsx! { NumbersView {} },
        ViewKind::Rhymes => rsx! { RhymeListView {} },
        ViewKind::Rhyme(id) => rsx! { RhymeView { id } },
        ViewKind::RhymeFollowing => rsx! { FollowingRhyme {} },
        ViewKind::Spelling => rsx! { SpellingListView {} },
        ViewKind::SpellingWord(id) => rsx! { SpellingWordView { id } },
    }
}

#[component]
fn FollowingRhyme() -> Element {
    let ids = use_context::<Option<watch::Receiver<String>>>();
    let mut id = use_signal({
        let ids = ids.clone();
        move || ids.as_ref().map(|rx| rx.borrow().clone()).unwrap_or_default()
    });
    use_future(move || {
        let ids = ids.clone();
        async move {
            let Some(mut ids) = ids else {
                return;
            };
            while ids.changed().await.is_ok() {
                id.set(ids.borrow_and_update().clone());
            }
        }
    });
    rsx! { RhymeView { id: id() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
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
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

/// Harness over in-memory storage with no speech support.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = AppServices::new(
        &Storage::in_memory(),
        fixed_clock(),
        Arc::new(NoSpeech),
        Arc::new(NoSpeech),
    );
    setup_view_harness_with_services(view, services, None)
}

pub fn setup_view_harness_with_services(
    view: ViewKind,
    services: AppServices,
    bridge: Option<WebSpeech>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
        bridge,
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            rhyme_ids: None,
        },
    );
    ViewHarness { dom, services }
}

/// Rhyme page that switches to whatever id is sent on the returned channel.
pub fn setup_rhyme_switch_harness(first: &str) -> (ViewHarness, watch::Sender<String>) {
    let services = AppServices::new(
        &Storage::in_memory(),
        fixed_clock(),
        Arc::new(NoSpeech),
        Arc::new(NoSpeech),
    );
    let (tx, rx) = watch::channel(first.to_string());
    let app = Arc::new(TestApp {
        services: services.clone(),
        bridge: None,
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view: ViewKind::RhymeFollowing,
            rhyme_ids: Some(rx),
        },
    );
    (ViewHarness { dom, services }, tx)
}
