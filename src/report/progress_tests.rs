use super::*;

#[test]
fn test_progress_bar_hidden_in_quiet_mode() {
    let progress = CheckProgress::new(true);
    progress.inc();
    progress.inc();
    progress.finish();
}

#[test]
fn test_progress_bar_total_set_after_increments() {
    let progress = CheckProgress::new(true);

    for _ in 0..10 {
        progress.inc();
    }
    progress.set_total(10);

    progress.finish();
}

#[test]
fn test_progress_bar_clone_shares_counter() {
    let progress = CheckProgress::new(true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.counter.load(std::sync::atomic::Ordering::Relaxed), 2);
    progress.finish();
}

#[test]
fn test_visible_progress_bar_creation() {
    let progress = CheckProgress::new_with_visibility(false, true);
    progress.set_total(5);
    progress.inc();
    progress.finish();
}
