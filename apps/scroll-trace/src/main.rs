use stackscroll_foundation::InputSource;
use stackscroll_testing::{three_panel_stack, StackFixture};
use stackscroll_ui::{Axis, DispatchOutcome, InputType, PanelSlot};

fn report(label: &str, stack: &StackFixture) {
    let active = stack.layout.active_target();
    println!(
        "{label:<28} offset {:>5}  active {:<10} content {:>4}  next {:>4}  previous {:>4}",
        stack.offset(),
        format!("{:?}", active.child),
        stack.content.position(),
        stack.next.position(),
        stack.previous.position(),
    );
}

fn summarize(outcomes: &[DispatchOutcome]) -> String {
    let own: i32 = outcomes.iter().map(|outcome| outcome.consumed()).sum();
    let forwarded = outcomes
        .iter()
        .filter(|outcome| **outcome == DispatchOutcome::TargetConsumed)
        .count();
    format!(
        "{} frames, {own}px on the container, {forwarded} frames to the target",
        outcomes.len()
    )
}

fn swipe_and_fling(axis: Axis) {
    println!("--- {axis:?} swipe on the content header ---");
    let mut stack = three_panel_stack(axis, (120, 120));
    report("laid out", &stack);

    let mut robot = stack.robot();
    robot.press_and_move(180.0, 60.0, 12);
    let claimed = robot.up();
    let outcomes = robot.run_fling(2_000);
    log::info!("release claimed: {claimed}; fling: {}", summarize(&outcomes));
    report("after swipe + fling", &stack);
}

fn fling_through_exhausted_list() {
    println!("--- fling past the end of the content list ---");
    let mut stack = three_panel_stack(Axis::Vertical, (0, 0));
    let content = stack.content.as_target();
    stack
        .layout
        .on_nested_scroll_accepted(PanelSlot::Content, content, InputType::NonTouch);
    stack.content.set_position(1_200);
    report("content list at its end", &stack);

    let mut robot = stack.robot();
    robot.layout().on_nested_pre_fling(4_000.0);
    let outcomes = robot.run_fling(2_000);
    log::info!("fling: {}", summarize(&outcomes));
    report("after hand-off to Next", &stack);
}

fn overscroll_then_settle() {
    println!("--- nested pre-scroll inside the overscroll band ---");
    let mut stack = three_panel_stack(Axis::Vertical, (100, 0));
    let content = stack.content.as_target();
    stack
        .layout
        .on_nested_scroll_accepted(PanelSlot::Content, content, InputType::Touch);
    for delta in [-120, -120, -120, -60, 30, 30] {
        let consumed = stack.layout.on_nested_pre_scroll(delta, InputType::Touch);
        log::info!("pre-scroll {delta:>4} consumed {consumed:>4}");
        report("", &stack);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== stackscroll trace ===");
    println!("Set RUST_LOG=debug to see each dispatch decision, trace for fling ticks.");
    println!();

    swipe_and_fling(Axis::Vertical);
    swipe_and_fling(Axis::Horizontal);
    fling_through_exhausted_list();
    overscroll_then_settle();
}
