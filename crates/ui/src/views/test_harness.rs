use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{InputSender, SessionFactory};
use speedmath_core::model::InputEvent;

use crate::context::{UiApp, build_app_context};
use crate::views::DrillView;
use crate::vm::forward_key;
use crate::views::drill::DrillTestHandles;

struct TestApp {
    session_factory: Arc<SessionFactory>,
}

impl UiApp for TestApp {
    fn session_factory(&self) -> Arc<SessionFactory> {
        Arc::clone(&self.session_factory)
    }
}

#[derive(Props, Clone)]
struct HarnessRootProps {
    app: Arc<TestApp>,
    handles: DrillTestHandles,
}

impl PartialEq for HarnessRootProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessRootProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { DrillView {} }
}

pub struct DrillHarness {
    pub dom: VirtualDom,
    pub handles: DrillTestHandles,
}

impl DrillHarness {
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

    pub fn input(&self) -> InputSender {
        self.handles.input()
    }

    /// Types `answer` digit by digit, then submits.
    pub fn answer(&self, answer: &str) {
        let input = self.input();
        for ch in answer.chars() {
            let value = ch.to_digit(10).expect("answer is numeric");
            input
                .send_digit(u8::try_from(value).expect("single digit"))
                .expect("queue open");
        }
        input.send(InputEvent::Submit).expect("queue open");
    }

    /// Routes a key press the way the view's `onkeydown` handler does.
    pub fn press(&self, key: Key) -> bool {
        forward_key(&key, &self.input())
    }

    /// Fires the "New drill" button's handler.
    pub fn restart(&self) {
        let restart = self.handles.restart();
        self.dom.in_runtime(|| restart.call(()));
    }

    pub fn row_prompts(&self) -> Vec<String> {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            vm.peek()
                .rows()
                .into_iter()
                .map(|row| row.prompt)
                .collect()
        })
    }

    pub fn current_index(&self) -> usize {
        let vm = self.handles.vm();
        self.dom
            .in_runtime(|| vm.peek().controller().current_index())
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

/// Harness around `DrillView` backed by a factory seeded with `seed`.
pub fn setup_drill_harness(seed: u64) -> DrillHarness {
    let handles = DrillTestHandles::default();
    let app = Arc::new(TestApp {
        session_factory: Arc::new(SessionFactory::from_seed(Some(seed))),
    });
    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessRootProps {
            app,
            handles: handles.clone(),
        },
    );
    DrillHarness { dom, handles }
}
