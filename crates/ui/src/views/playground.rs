use dioxus::prelude::*;

use chainlab_core::model::{AidKind, AnswerKey, Outcome, Tier, Verdict};

use crate::context::AppContext;
use crate::vm::{RunIntent, RunPhase, format_duration, start_run};

#[cfg(test)]
use crate::views::test_harness::RunTestHandles;

fn tier_line(tier: Tier) -> &'static str {
    match tier {
        Tier::Expert => "You write Java like a pro!",
        Tier::Strong => "Strong coding fundamentals.",
        Tier::Developing => "Getting there. Loops and classes take practice.",
        Tier::Starting => "Hello World is how everyone starts.",
    }
}

#[component]
pub fn PlaygroundView() -> Element {
    let ctx = use_context::<AppContext>();
    let play = ctx.play();
    let delays = ctx.delays();
    let catalog = ctx.catalog();
    let vm = use_signal(move || start_run(&play, catalog.code()));
    let busy = use_signal(|| false);
    let mut code = use_signal(String::new);
    let mut hints_shown = use_signal(|| 0usize);

    let dispatch = use_callback(move |intent: RunIntent| {
        if busy() {
            return;
        }
        let mut busy = busy;
        let mut vm = vm;
        let mut code = code;
        let mut hints_shown = hints_shown;
        let run_delay = matches!(intent, RunIntent::Submit(_));
        let was_restart = matches!(intent, RunIntent::Restart);
        spawn(async move {
            if run_delay && !delays.code_run.is_zero() {
                busy.set(true);
                tokio::time::sleep(delays.code_run).await;
                busy.set(false);
            }
            let before = vm.read().session().index();
            vm.write().apply(&play, intent);
            if was_restart || vm.read().session().index() != before {
                code.set(String::new());
                hints_shown.set(0);
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<RunTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let busy_now = busy();
    let run = vm.read();

    if run.is_finished() {
        let Ok(summary) = play.summarize(run.session()) else {
            return rsx! {
                div { class: "page playground-page",
                    p { "Something went wrong. Please restart the playground." }
                }
            };
        };
        let tier = tier_line(summary.tier());
        let score_label = format!("{} / {}", summary.score(), summary.max_score());
        let accuracy_label = format!("{}%", summary.accuracy_percent());
        let time_label = format_duration(summary.duration());
        let correct = summary.correct();
        let incorrect = summary.incorrect();
        let skipped = summary.skipped();

        return rsx! {
            div { class: "page playground-page",
                h2 { "Java Code Playground" }
                div { class: "run-complete",
                    h3 { "All levels played" }
                    p { class: "run-complete__tier", "{tier}" }
                    dl { class: "run-stats",
                        dt { "Score" }
                        dd { "{score_label}" }

                        dt { "Accuracy" }
                        dd { "{accuracy_label}" }

                        dt { "Solved" }
                        dd { "{correct}" }

                        dt { "Missed" }
                        dd { "{incorrect}" }

                        dt { "Skipped" }
                        dd { "{skipped}" }

                        dt { "Time" }
                        dd { "{time_label}" }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "playground-restart",
                        onclick: move |_| dispatch.call(RunIntent::Restart),
                        "Start Over"
                    }
                }
            }
        };
    }

    let session = run.session();
    let number = session.index() + 1;
    let total = session.pack().len();
    let score = session.score();
    let reward = session.pack().reward();
    let revealed = run.phase() == RunPhase::Revealed;

    let title = session
        .current_item()
        .and_then(|item| item.title().map(str::to_string))
        .unwrap_or_default();
    let prompt = session
        .current_item()
        .map(|item| item.prompt().to_string())
        .unwrap_or_default();
    let hints: Vec<String> = session
        .current_item()
        .map(|item| item.hints().to_vec())
        .unwrap_or_default();
    let solution = session.current_item().and_then(|item| match item.key() {
        AnswerKey::Pattern { solution, .. } => Some(solution.clone()),
        AnswerKey::Choice { .. } => None,
    });

    let shown = hints_shown().min(hints.len());
    let visible_hints: Vec<String> = hints.iter().take(shown).cloned().collect();
    let hint_label = format!("Show Hint ({shown}/{})", hints.len());
    let hints_exhausted = shown >= hints.len();

    let skip_left = session.inventory().count(AidKind::Skip);
    let skip_blocked = busy_now || revealed || skip_left == 0 || session.aid_used(AidKind::Skip);
    let code_empty = code.read().trim().is_empty();
    let notice = run.notice().map(str::to_string);

    let dots: Vec<&'static str> = {
        let mut dots = Vec::with_capacity(total);
        for result in session.history() {
            dots.push(match result.outcome() {
                Outcome::Correct => "level-dot level-dot--correct",
                Outcome::Incorrect => "level-dot level-dot--wrong",
                Outcome::Skipped => "level-dot level-dot--skipped",
            });
        }
        while dots.len() < total {
            if dots.len() == session.index() {
                dots.push("level-dot level-dot--active");
            } else {
                dots.push("level-dot");
            }
        }
        dots
    };

    let verdict = run.verdict();
    let next_label = if number == total { "Finish" } else { "Next Level" };

    rsx! {
        div { class: "page playground-page",
            h2 { "Java Code Playground" }
            header { class: "run-header",
                span { class: "run-header__progress", "Level {number} / {total} · {title}" }
                span { class: "run-header__score", "Score: {score}" }
            }
            div { class: "level-dots",
                for (dot_index, dot_class) in dots.iter().enumerate() {
                    span { key: "{dot_index}", class: "{dot_class}" }
                }
            }
            p { class: "playground-prompt", "{prompt}" }
            div { class: "playground-hints",
                button {
                    class: "aid-btn",
                    id: "playground-hint",
                    disabled: hints_exhausted,
                    onclick: move |_| hints_shown.set(hints_shown() + 1),
                    "{hint_label}"
                }
                button {
                    class: "aid-btn",
                    id: "playground-skip",
                    disabled: skip_blocked,
                    onclick: move |_| dispatch.call(RunIntent::UseAid(AidKind::Skip)),
                    "Skip Level ×{skip_left}"
                }
            }
            if !visible_hints.is_empty() {
                ul { class: "playground-hint-list",
                    for (hint_index, hint) in visible_hints.iter().enumerate() {
                        li { key: "{hint_index}", "{hint}" }
                    }
                }
            }
            textarea {
                class: "playground-editor",
                id: "playground-code",
                rows: "10",
                placeholder: "// Type your Java code here",
                disabled: revealed || busy_now,
                value: "{code}",
                oninput: move |evt| code.set(evt.value()),
            }
            div { class: "playground-actions",
                button {
                    class: "btn btn-primary",
                    id: "playground-run",
                    disabled: busy_now || revealed || code_empty,
                    onclick: move |_| dispatch.call(RunIntent::Submit(code())),
                    "Run Code"
                }
            }
            if busy_now {
                p { class: "run-busy", "Running..." }
            }
            if let Some(notice) = notice {
                p { class: "run-notice", "{notice}" }
            }
            if revealed {
                div { class: "playground-reveal",
                    match verdict {
                        Some(Verdict::Correct) => rsx! {
                            h3 { class: "quiz-verdict quiz-verdict--correct", "Level passed! +{reward}" }
                        },
                        Some(Verdict::Incorrect) => rsx! {
                            h3 { class: "quiz-verdict quiz-verdict--wrong", "Not this time." }
                            if let Some(solution) = solution {
                                p { class: "playground-solution-label", "One working solution:" }
                                pre { class: "playground-solution",
                                    code { "{solution}" }
                                }
                            }
                        },
                        None => rsx! {},
                    }
                    button {
                        class: "btn btn-primary",
                        id: "playground-next",
                        onclick: move |_| dispatch.call(RunIntent::Advance),
                        "{next_label}"
                    }
                }
            }
        }
    }
}
