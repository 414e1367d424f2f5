use std::sync::atomic::AtomicUsize;
use std::time::SystemTime;

use super::*;

fn counter() -> (Arc<AtomicUsize>, impl FnMut(&Path) + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&count);
    (count, move |_: &Path| {
        inner.fetch_add(1, Ordering::SeqCst);
    })
}

fn wait_for(count: &AtomicUsize, at_least: usize, deadline: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if count.load(Ordering::SeqCst) >= at_least {
            return true;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    count.load(Ordering::SeqCst) >= at_least
}

#[test]
fn watch_missing_path_errors() {
    let registry = WatchRegistry::new();
    let (_, on_check) = counter();
    let err = registry
        .watch(Path::new("/no/such/watched.js"), on_check)
        .unwrap_err();
    assert!(matches!(err, LintSweepError::FileRead { .. }));
}

#[test]
fn watch_directory_errors() {
    let dir = tempfile::tempdir().unwrap();
    let registry = WatchRegistry::new();
    let (_, on_check) = counter();
    let err = registry.watch(dir.path(), on_check).unwrap_err();
    assert!(matches!(err, LintSweepError::Config(_)));
}

#[test]
fn first_check_runs_before_watch_returns() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "var a = 1;\n").unwrap();

    let registry = WatchRegistry::new();
    let (count, on_check) = counter();
    registry.watch(&file, on_check).unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(registry.is_watched(&file));
    assert!(registry.unwatch(&file));
}

#[test]
fn duplicate_watch_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "var a = 1;\n").unwrap();

    let registry = WatchRegistry::new();
    let (_, first) = counter();
    registry.watch(&file, first).unwrap();

    let (_, second) = counter();
    let err = registry.watch(&file, second).unwrap_err();
    assert!(matches!(err, LintSweepError::Config(_)));
    assert_eq!(registry.len(), 1);
    registry.unwatch(&file);
}

#[test]
fn unwatch_unknown_path_returns_false() {
    let registry = WatchRegistry::new();
    assert!(!registry.unwatch(Path::new("/no/such/watched.js")));
}

#[test]
fn modification_triggers_debounced_recheck() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "var a = 1;\n").unwrap();

    let registry = WatchRegistry::new();
    let (count, on_check) = counter();
    registry.watch(&file, on_check).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // Give the poll thread a tick, then modify the file.
    std::thread::sleep(Duration::from_millis(300));
    fs::write(&file, "var a = 2;\n").unwrap();
    // Make sure the modification time moved even on coarse filesystems.
    let _ = fs::File::open(&file).and_then(|f| {
        f.set_modified(SystemTime::now())?;
        Ok(())
    });

    assert!(
        wait_for(&count, 2, Duration::from_secs(5)),
        "recheck never fired"
    );
    registry.unwatch(&file);
}

#[test]
fn two_writes_in_one_window_recheck_once() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "var a = 1;\n").unwrap();

    let registry = WatchRegistry::new();
    let (count, on_check) = counter();
    registry.watch(&file, on_check).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // Two writes 200ms apart, both inside one debounce window, with the
    // modification time forced forward so coarse filesystems see both.
    std::thread::sleep(Duration::from_millis(300));
    fs::write(&file, "var a = 2;\n").unwrap();
    let _ = fs::File::open(&file).and_then(|f| f.set_modified(SystemTime::now()));
    std::thread::sleep(Duration::from_millis(200));
    fs::write(&file, "var a = 3;\n").unwrap();
    let _ = fs::File::open(&file).and_then(|f| f.set_modified(SystemTime::now()));

    assert!(
        wait_for(&count, 2, Duration::from_secs(5)),
        "recheck never fired"
    );
    // Let further windows elapse; the coalesced write must not add another.
    std::thread::sleep(Duration::from_millis(2500));
    assert_eq!(count.load(Ordering::SeqCst), 2);
    registry.unwatch(&file);
}

#[test]
fn unwatch_stops_rechecking() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "var a = 1;\n").unwrap();

    let registry = WatchRegistry::new();
    let (count, on_check) = counter();
    registry.watch(&file, on_check).unwrap();
    assert!(registry.unwatch(&file));
    assert!(!registry.is_watched(&file));

    fs::write(&file, "var a = 2;\n").unwrap();
    std::thread::sleep(Duration::from_millis(1500));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn drop_tears_down_watch_threads() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "var a = 1;\n").unwrap();

    let (count, on_check) = counter();
    {
        let registry = WatchRegistry::new();
        registry.watch(&file, on_check).unwrap();
        assert_eq!(registry.len(), 1);
    }
    // Registry dropped; poll thread has been joined and no longer runs.
    fs::write(&file, "var a = 2;\n").unwrap();
    std::thread::sleep(Duration::from_millis(1500));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
