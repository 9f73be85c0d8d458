use chainlab_core::model::{AidKind, AnswerKey};

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness};
use crate::vm::{BenchIntent, RunIntent};

fn correct_choice(harness: &ViewHarness) -> String {
    let vm = harness.run_handles.vm();
    let run = vm.read();
    let item = run.session().current_item().expect("a current item");
    match item.key() {
        AnswerKey::Choice { options, correct } => options[*correct].clone(),
        AnswerKey::Pattern { .. } => panic!("expected a multiple-choice item"),
    }
}

fn reference_solution(harness: &ViewHarness) -> String {
    let vm = harness.run_handles.vm();
    let run = vm.read();
    let item = run.session().current_item().expect("a current item");
    match item.key() {
        AnswerKey::Pattern { solution, .. } => solution.clone(),
        AnswerKey::Choice { .. } => panic!("expected a code item"),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_the_three_pages() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("8 questions"), "missing quiz card in {html}");
    assert!(
        html.contains("13 Java levels"),
        "missing playground card in {html}"
    );
    assert!(
        html.contains("Voting.sol"),
        "missing workbench card in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_answers_and_advances() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 / 8"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(
        html.contains("Remove a wrong option ×2"),
        "missing eliminate aid in {html}"
    );
    assert!(html.contains("Skip ×1"), "missing skip aid in {html}");

    let answer = correct_choice(&harness);
    harness.run_handles.dispatch().call(RunIntent::Submit(answer));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(html.contains("Score: 10"), "missing new score in {html}");
    assert!(
        html.contains("Next Question"),
        "missing advance button in {html}"
    );

    harness.run_handles.dispatch().call(RunIntent::Advance);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Question 2 / 8"),
        "missing next question in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_eliminate_removes_an_option() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    harness
        .run_handles
        .dispatch()
        .call(RunIntent::UseAid(AidKind::Eliminate));
    harness.drive_async().await;

    let vm = harness.run_handles.vm();
    let offered = vm.read().session().offered_options().len();
    assert_eq!(offered, 3);

    let html = harness.render();
    assert!(html.contains("Eliminated:"), "missing removed label in {html}");
    assert!(
        html.contains("Remove a wrong option ×1"),
        "missing spent charge in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_perfect_run_ends_in_a_summary() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    for _ in 0..8 {
        let answer = correct_choice(&harness);
        harness.run_handles.dispatch().call(RunIntent::Submit(answer));
        harness.drive_async().await;
        harness.run_handles.dispatch().call(RunIntent::Advance);
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Quiz complete"), "missing summary in {html}");
    assert!(
        html.contains("Blockchain expert in the making!"),
        "missing tier line in {html}"
    );
    assert!(html.contains("80 / 80"), "missing score in {html}");
    assert!(html.contains("100%"), "missing accuracy in {html}");

    harness.run_handles.dispatch().call(RunIntent::Restart);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Question 1 / 8"),
        "missing fresh run in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn playground_view_smoke_solves_the_first_level() {
    let mut harness = setup_view_harness(ViewKind::Playground);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Level 1 / 13"), "missing progress in {html}");
    assert!(html.contains("Hello World"), "missing level title in {html}");
    assert!(
        html.contains("Show Hint (0/3)"),
        "missing hint button in {html}"
    );
    assert!(html.contains("Skip Level ×3"), "missing skip aid in {html}");

    let code = reference_solution(&harness);
    harness.run_handles.dispatch().call(RunIntent::Submit(code));
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Level passed! +10"),
        "missing pass banner in {html}"
    );

    harness.run_handles.dispatch().call(RunIntent::Advance);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Level 2 / 13"), "missing next level in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn playground_view_smoke_shows_the_solution_after_a_miss() {
    let mut harness = setup_view_harness(ViewKind::Playground);
    harness.rebuild();

    harness
        .run_handles
        .dispatch()
        .call(RunIntent::Submit("int x = 0;".to_string()));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Not this time."), "missing verdict in {html}");
    assert!(
        html.contains("One working solution:"),
        "missing solution label in {html}"
    );
    assert!(
        html.contains("System.out.println"),
        "missing solution code in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn workbench_view_smoke_runs_the_demo_flow() {
    let mut harness = setup_view_harness(ViewKind::Workbench);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Voting.sol"), "missing contract name in {html}");
    assert!(
        html.contains("Console output appears here."),
        "missing empty console in {html}"
    );

    harness.bench_handles.dispatch().call(BenchIntent::Compile);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Contract compiled successfully!"),
        "missing compile log in {html}"
    );

    harness.bench_handles.dispatch().call(BenchIntent::Deploy);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Deployed at 0x1234567890abcdef1234567890abcdef12345678"),
        "missing address in {html}"
    );
    assert!(html.contains("Cast a vote"), "missing ballot in {html}");

    harness.bench_handles.dispatch().call(BenchIntent::Vote(1));
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Candidate B now has 1 vote(s)"),
        "missing vote log in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn workbench_view_smoke_rejects_a_premature_deploy() {
    let mut harness = setup_view_harness(ViewKind::Workbench);
    harness.rebuild();

    harness.bench_handles.dispatch().call(BenchIntent::Deploy);
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("compile the contract before deploying"),
        "missing notice in {html}"
    );
    let vm = harness.bench_handles.vm();
    assert!(!vm.read().bench().is_deployed());
}

#[tokio::test(flavor = "current_thread")]
async fn workbench_view_smoke_toggles_a_line_note() {
    let mut harness = setup_view_harness(ViewKind::Workbench);
    harness.rebuild();

    harness.bench_handles.dispatch().call(BenchIntent::Select(4));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Line 4"), "missing note heading in {html}");
    assert!(
        html.contains("A struct groups related fields"),
        "missing note text in {html}"
    );

    harness.bench_handles.dispatch().call(BenchIntent::Select(4));
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("Line 4"), "note still open in {html}");
}
