use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{BenchIntent, WorkbenchVm};

#[cfg(test)]
use crate::views::test_harness::BenchTestHandles;

struct LineRow {
    number: usize,
    text: String,
    class: String,
}

#[component]
pub fn WorkbenchView() -> Element {
    let ctx = use_context::<AppContext>();
    let delays = ctx.delays();
    let vm = use_signal(move || WorkbenchVm::new(ctx.workbench()));
    let busy = use_signal(|| false);

    let dispatch = use_callback(move |intent: BenchIntent| {
        if busy() {
            return;
        }
        let mut busy = busy;
        let mut vm = vm;
        let delay = match intent {
            BenchIntent::Compile => delays.compile,
            BenchIntent::Deploy => delays.deploy,
            BenchIntent::Vote(_) => delays.vote,
            BenchIntent::Select(_) | BenchIntent::Reset => std::time::Duration::ZERO,
        };
        spawn(async move {
            if !delay.is_zero() {
                busy.set(true);
                tokio::time::sleep(delay).await;
                busy.set(false);
            }
            vm.write().apply(intent);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<BenchTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let busy_now = busy();
    let bench_vm = vm.read();
    let bench = bench_vm.bench();

    let contract_name = bench.contract().name().to_string();
    let compiled = bench.is_compiled();
    let deployed = bench.is_deployed();
    let address = bench.address().map(str::to_string);
    let selected = bench_vm.selected_line();
    let selected_note = bench_vm.selected_note().map(str::to_string);
    let notice = bench_vm.notice().map(str::to_string);
    let log: Vec<String> = bench.log().to_vec();
    let candidates: Vec<(String, u32)> = bench
        .candidates()
        .iter()
        .map(|candidate| (candidate.name().to_string(), candidate.votes()))
        .collect();
    let line_rows: Vec<LineRow> = bench
        .contract()
        .code()
        .lines()
        .enumerate()
        .map(|(line_index, text)| {
            let number = line_index + 1;
            let mut class = String::from("bench-line");
            if bench.contract().note_for_line(number).is_some() {
                class.push_str(" bench-line--annotated");
            }
            if selected == Some(number) {
                class.push_str(" bench-line--selected");
            }
            LineRow {
                number,
                text: text.to_string(),
                class,
            }
        })
        .collect();

    rsx! {
        div { class: "page bench-page",
            h2 { "Smart Contract Workbench" }
            header { class: "bench-status",
                span { class: "bench-status__name", "{contract_name}" }
                span {
                    class: if compiled { "bench-chip bench-chip--on" } else { "bench-chip" },
                    "Compiled"
                }
                span {
                    class: if deployed { "bench-chip bench-chip--on" } else { "bench-chip" },
                    "Deployed"
                }
            }
            if let Some(address) = address {
                p { class: "bench-address", "Deployed at {address}" }
            }
            div { class: "bench-layout",
                div { class: "bench-editor",
                    p { class: "bench-editor__help", "Click a highlighted line to see what it does." }
                    for row in line_rows {
                        div {
                            key: "{row.number}",
                            class: "{row.class}",
                            onclick: move |_| dispatch.call(BenchIntent::Select(row.number)),
                            span { class: "bench-line__number", "{row.number}" }
                            span { class: "bench-line__text", "{row.text}" }
                        }
                    }
                }
                div { class: "bench-side",
                    if let Some(line) = selected {
                        aside { class: "bench-note",
                            h4 { "Line {line}" }
                            if let Some(note) = selected_note {
                                p { "{note}" }
                            } else {
                                p { class: "bench-note__none", "No note on this line." }
                            }
                        }
                    }
                    div { class: "bench-actions",
                        button {
                            class: "btn btn-primary",
                            id: "bench-compile",
                            disabled: busy_now,
                            onclick: move |_| dispatch.call(BenchIntent::Compile),
                            "Compile"
                        }
                        button {
                            class: "btn btn-primary",
                            id: "bench-deploy",
                            disabled: busy_now || !compiled || deployed,
                            onclick: move |_| dispatch.call(BenchIntent::Deploy),
                            "Deploy"
                        }
                        button {
                            class: "btn btn-ghost",
                            id: "bench-reset",
                            disabled: busy_now,
                            onclick: move |_| dispatch.call(BenchIntent::Reset),
                            "Reset"
                        }
                    }
                    if let Some(notice) = notice {
                        p { class: "run-notice", "{notice}" }
                    }
                    div { class: "bench-console",
                        h3 { "Console" }
                        if log.is_empty() && !busy_now {
                            p { class: "bench-console__empty", "Console output appears here." }
                        }
                        for (line_index, line) in log.iter().enumerate() {
                            p { key: "{line_index}", class: "bench-console__line", "{line}" }
                        }
                        if busy_now {
                            p { class: "bench-console__line bench-console__line--busy", "..." }
                        }
                    }
                    if deployed {
                        section { class: "bench-ballot",
                            h3 { "Cast a vote" }
                            for (candidate_index, (name, votes)) in candidates.into_iter().enumerate() {
                                div { key: "{candidate_index}", class: "bench-candidate",
                                    span { class: "bench-candidate__name", "{name}" }
                                    span { class: "bench-candidate__votes", "{votes} vote(s)" }
                                    button {
                                        class: "btn btn-small",
                                        disabled: busy_now || !deployed,
                                        onclick: move |_| dispatch.call(BenchIntent::Vote(candidate_index)),
                                        "Vote"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
