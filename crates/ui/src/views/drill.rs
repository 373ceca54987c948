use dioxus::document::eval;
use dioxus::prelude::*;

use services::input_channel;

use crate::context::AppContext;
use crate::vm::{DrillVm, forward_key};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn DrillView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal({
        let ctx = ctx.clone();
        move || DrillVm::new(ctx.start_session())
    });

    // Key presses go through the queue; one task applies them in order.
    let input = use_hook(move || {
        let (sender, mut queue) = input_channel();
        spawn(async move {
            let mut vm = vm;
            while let Some(event) = queue.next().await {
                vm.write().apply(event);
            }
        });
        sender
    });

    // Swaps in a fresh session; the consumer task keeps writing to the same signal.
    let restart = use_callback(move |()| {
        let mut vm = vm;
        vm.set(DrillVm::new(ctx.start_session()));
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DrillTestHandles>() {
                handles.register(input.clone(), vm, restart);
            }
        }
    }

    use_effect(move || {
        let _ = eval("document.getElementById(\"drill\")?.focus();");
    });

    let on_key = {
        let input = input.clone();
        move |evt: KeyboardEvent| {
            if forward_key(&evt.data.key(), &input) {
                evt.prevent_default();
            }
        }
    };

    let vm_guard = vm.read();
    let rows = vm_guard.rows();
    let offset = vm_guard.scroll_offset_px();
    let score_label = vm_guard.score_label();
    let complete = vm_guard.is_complete();
    let summary_label = vm_guard.summary_label();
    drop(vm_guard);

    rsx! {
        div { id: "drill", class: "page page--drill", tabindex: "0", onkeydown: on_key,
            div { class: "drill-score", "{score_label}" }
            div { class: "drill-viewport",
                div {
                    class: "drill-rows",
                    style: "transform: translateY(-{offset}px);",
                    for row in rows {
                        div { key: "{row.index}", class: row.class(),
                            span { class: "drill-prompt", "{row.prompt}" }
                            span { class: "drill-answer", "{row.answer}" }
                        }
                    }
                }
            }
            if complete {
                div { class: "drill-summary",
                    h2 { "Drill complete" }
                    p { "{summary_label}" }
                    button {
                        id: "drill-new",
                        class: "btn btn-primary",
                        onclick: move |_| restart.call(()),
                        "New drill"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DrillTestHandles {
    input: Rc<RefCell<Option<services::InputSender>>>,
    vm: Rc<RefCell<Option<Signal<DrillVm>>>>,
    restart: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl DrillTestHandles {
    pub(crate) fn register(
        &self,
        input: services::InputSender,
        vm: Signal<DrillVm>,
        restart: Callback<()>,
    ) {
        *self.input.borrow_mut() = Some(input);
        *self.vm.borrow_mut() = Some(vm);
        *self.restart.borrow_mut() = Some(restart);
    }

    pub(crate) fn input(&self) -> services::InputSender {
        self.input
            .borrow()
            .clone()
            .expect("drill input registered")
    }

    pub(crate) fn vm(&self) -> Signal<DrillVm> {
        (*self.vm.borrow()).expect("drill vm registered")
    }

    pub(crate) fn restart(&self) -> Callback<()> {
        (*self.restart.borrow()).expect("drill restart registered")
    }
}
