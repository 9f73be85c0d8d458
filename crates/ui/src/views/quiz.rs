use dioxus::prelude::*;

use chainlab_core::model::{AidKind, AnswerKey, Tier, Verdict};

use crate::context::AppContext;
use crate::vm::{RunIntent, RunPhase, format_duration, start_run};

#[cfg(test)]
use crate::views::test_harness::RunTestHandles;

fn tier_line(tier: Tier) -> &'static str {
    match tier {
        Tier::Expert => "Blockchain expert in the making!",
        Tier::Strong => "Strong grasp of how chains fit together.",
        Tier::Developing => "Solid progress. Keep stacking blocks.",
        Tier::Starting => "Every chain starts at its genesis block.",
    }
}

struct OptionRow {
    label: String,
    submit: String,
    class: String,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let play = ctx.play();
    let delays = ctx.delays();
    let catalog = ctx.catalog();
    let vm = use_signal(move || start_run(&play, catalog.quiz()));
    let busy = use_signal(|| false);

    let dispatch = use_callback(move |intent: RunIntent| {
        if busy() {
            return;
        }
        let mut busy = busy;
        let mut vm = vm;
        let reveal = matches!(intent, RunIntent::Submit(_));
        spawn(async move {
            if reveal && !delays.answer.is_zero() {
                busy.set(true);
                tokio::time::sleep(delays.answer).await;
                busy.set(false);
            }
            vm.write().apply(&play, intent);
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
                div { class: "page quiz-page",
                    p { "Something went wrong. Please restart the quiz." }
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
            div { class: "page quiz-page",
                h2 { "Blockchain Knowledge Quiz" }
                div { class: "run-complete",
                    h3 { "Quiz complete" }
                    p { class: "run-complete__tier", "{tier}" }
                    dl { class: "run-stats",
                        dt { "Score" }
                        dd { "{score_label}" }

                        dt { "Accuracy" }
                        dd { "{accuracy_label}" }

                        dt { "Correct" }
                        dd { "{correct}" }

                        dt { "Incorrect" }
                        dd { "{incorrect}" }

                        dt { "Skipped" }
                        dd { "{skipped}" }

                        dt { "Time" }
                        dd { "{time_label}" }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "quiz-restart",
                        onclick: move |_| dispatch.call(RunIntent::Restart),
                        "Play Again"
                    }
                }
            }
        };
    }

    let session = run.session();
    let number = session.index() + 1;
    let total = session.pack().len();
    let score = session.score();
    let revealed = run.phase() == RunPhase::Revealed;

    let category = session
        .current_item()
        .and_then(|item| item.category().map(str::to_string));
    let prompt = session
        .current_item()
        .map(|item| item.prompt().to_string())
        .unwrap_or_default();
    let explanation = session
        .current_item()
        .and_then(|item| item.explanation().map(str::to_string));
    let correct_text = session.current_item().and_then(|item| match item.key() {
        AnswerKey::Choice { options, correct } => options.get(*correct).cloned(),
        AnswerKey::Pattern { .. } => None,
    });
    let chosen = session
        .submission()
        .map(|submission| submission.candidate().to_string());
    let option_rows: Vec<OptionRow> = session
        .offered_options()
        .iter()
        .map(|option| {
            let mut class = String::from("quiz-option");
            if revealed {
                if Some(*option) == correct_text.as_deref() {
                    class.push_str(" quiz-option--correct");
                } else if chosen.as_deref() == Some(*option) {
                    class.push_str(" quiz-option--wrong");
                }
            }
            OptionRow {
                label: (*option).to_string(),
                submit: (*option).to_string(),
                class,
            }
        })
        .collect();

    let eliminate_left = session.inventory().count(AidKind::Eliminate);
    let skip_left = session.inventory().count(AidKind::Skip);
    let eliminate_blocked = busy_now
        || revealed
        || eliminate_left == 0
        || session.aid_used(AidKind::Eliminate);
    let skip_blocked = busy_now || revealed || skip_left == 0 || session.aid_used(AidKind::Skip);

    let removed = run.removed_option().map(str::to_string);
    let notice = run.notice().map(str::to_string);
    let (verdict_line, verdict_class) = match run.verdict() {
        Some(Verdict::Correct) => ("Correct!", "quiz-verdict quiz-verdict--correct"),
        Some(Verdict::Incorrect) => ("Not quite.", "quiz-verdict quiz-verdict--wrong"),
        None => ("", "quiz-verdict"),
    };
    let next_label = if number == total {
        "See Results"
    } else {
        "Next Question"
    };

    rsx! {
        div { class: "page quiz-page",
            h2 { "Blockchain Knowledge Quiz" }
            header { class: "run-header",
                span { class: "run-header__progress", "Question {number} / {total}" }
                span { class: "run-header__score", "Score: {score}" }
            }
            div { class: "quiz-aids",
                button {
                    class: "aid-btn",
                    id: "quiz-aid-eliminate",
                    disabled: eliminate_blocked,
                    onclick: move |_| dispatch.call(RunIntent::UseAid(AidKind::Eliminate)),
                    "Remove a wrong option ×{eliminate_left}"
                }
                button {
                    class: "aid-btn",
                    id: "quiz-aid-skip",
                    disabled: skip_blocked,
                    onclick: move |_| dispatch.call(RunIntent::UseAid(AidKind::Skip)),
                    "Skip ×{skip_left}"
                }
            }
            if let Some(category) = category {
                span { class: "quiz-category", "{category}" }
            }
            p { class: "quiz-prompt", "{prompt}" }
            div { class: "quiz-options",
                for (option_index, row) in option_rows.into_iter().enumerate() {
                    button {
                        key: "{option_index}",
                        class: "{row.class}",
                        disabled: revealed || busy_now,
                        onclick: move |_| dispatch.call(RunIntent::Submit(row.submit.clone())),
                        "{row.label}"
                    }
                }
            }
            if busy_now {
                p { class: "run-busy", "Checking..." }
            }
            if let Some(removed) = removed {
                p { class: "quiz-removed", "Eliminated: {removed}" }
            }
            if let Some(notice) = notice {
                p { class: "run-notice", "{notice}" }
            }
            if revealed {
                div { class: "quiz-reveal",
                    h3 { class: "{verdict_class}", "{verdict_line}" }
                    if let Some(explanation) = explanation {
                        p { class: "quiz-explanation", "{explanation}" }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "quiz-next",
                        onclick: move |_| dispatch.call(RunIntent::Advance),
                        "{next_label}"
                    }
                }
            }
        }
    }
}
