//! Whole-core scenario: history, re-recording the hotkey and pasteback,
//! driven through the public facade with in-memory adapters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hc_app::{CoreDeps, HotclipCore, HotkeyCapability};
use hc_core::config::AppConfig;
use hc_core::hotkey::{
    ChordSpec, KeyCode, KeyEvent, Modifiers, RecordingSignal, CHORD_CONFIG_KEY,
};
use hc_core::ports::{ConfigStorePort, PasteInjectorPort};
use hc_infra::{FixedClock, InMemoryConfigStore};
use hc_platform::{InMemoryClipboardSource, InMemoryKeyEventSource};

#[derive(Default)]
struct CountingInjector {
    pastes: AtomicUsize,
}

impl PasteInjectorPort for CountingInjector {
    fn synthesize_paste(&self) -> anyhow::Result<()> {
        self.pastes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct Harness {
    clipboard: Arc<InMemoryClipboardSource>,
    keys: Arc<InMemoryKeyEventSource>,
    store: Arc<InMemoryConfigStore>,
    injector: Arc<CountingInjector>,
    core: HotclipCore,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn harness() -> Harness {
    init_tracing();
    let clipboard = Arc::new(InMemoryClipboardSource::new());
    let keys = Arc::new(InMemoryKeyEventSource::new());
    let store = Arc::new(InMemoryConfigStore::new());
    let injector = Arc::new(CountingInjector::default());
    let core = HotclipCore::new(
        CoreDeps {
            clipboard: clipboard.clone(),
            paste_injector: injector.clone(),
            key_source: keys.clone(),
            config_store: store.clone(),
            clock: Arc::new(FixedClock::new(1_700_000_000_000)),
        },
        &AppConfig::default(),
    );
    Harness {
        clipboard,
        keys,
        store,
        injector,
        core,
    }
}

fn contents(core: &HotclipCore) -> Vec<String> {
    core.history_snapshot()
        .iter()
        .map(|entry| entry.content().to_string())
        .collect()
}

async fn copy_and_wait(h: &Harness, text: &str) {
    h.clipboard.copy(text);
    tokio::time::sleep(Duration::from_millis(600)).await;
}

#[tokio::test(start_paused = true)]
async fn history_and_hotkey_scenario() {
    let h = harness();
    let runtime = h.core.start(&AppConfig::default());
    let mut triggers = h.core.subscribe_triggers();
    let mut recording = h.core.subscribe_recording();

    assert_eq!(h.core.current_chord(), Some(ChordSpec::default()));
    assert_eq!(h.core.hotkey_capability(), HotkeyCapability::Active);

    copy_and_wait(&h, "hello").await;
    copy_and_wait(&h, "world").await;
    copy_and_wait(&h, "hello").await;
    assert_eq!(contents(&h.core), vec!["hello", "world"]);

    h.core.request_start_recording();
    h.keys.emit(&KeyEvent::new(
        KeyCode::K,
        Modifiers::CONTROL | Modifiers::OPTION,
    ));
    let new_chord = ChordSpec::new(KeyCode::K, Modifiers::CONTROL | Modifiers::OPTION);
    assert_eq!(recording.recv().await.unwrap(), RecordingSignal::Started);
    assert!(matches!(
        recording.recv().await.unwrap(),
        RecordingSignal::Finished { chord: Some(chord), .. } if chord == new_chord
    ));
    assert_eq!(h.core.current_chord(), Some(new_chord));
    let persisted = h.store.load(CHORD_CONFIG_KEY).unwrap().unwrap();
    assert_eq!(ChordSpec::decode(&persisted).unwrap(), new_chord);

    h.keys.emit(&KeyEvent::new(KeyCode::V, Modifiers::COMMAND | Modifiers::SHIFT));
    assert!(triggers.try_recv().is_err());

    h.keys.emit(&KeyEvent::new(
        KeyCode::K,
        Modifiers::CONTROL | Modifiers::OPTION,
    ));
    assert_eq!(triggers.try_recv().unwrap().chord, new_chord);
    assert!(triggers.try_recv().is_err());

    runtime.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn pasteback_is_not_recaptured_by_the_poller() {
    let h = harness();
    let runtime = h.core.start(&AppConfig::default());

    copy_and_wait(&h, "first").await;
    copy_and_wait(&h, "second").await;
    let first = h.core.history_snapshot()[1].id().clone();

    h.core.request_paste(&first).await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(h.clipboard.text().as_deref(), Some("first"));
    assert_eq!(h.injector.pastes.load(Ordering::SeqCst), 1);
    assert_eq!(contents(&h.core), vec!["second", "first"]);

    h.core.request_remove(&first);
    assert_eq!(contents(&h.core), vec!["second"]);
    h.core.request_clear();
    assert!(h.core.history_snapshot().is_empty());

    runtime.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn cleared_chord_stays_cleared_and_escape_keeps_nothing_armed() {
    let h = harness();
    let mut triggers = h.core.subscribe_triggers();

    h.core.request_clear_chord();
    assert_eq!(h.core.current_chord(), None);
    assert_eq!(h.core.hotkey_capability(), HotkeyCapability::Inert);

    h.core.request_start_recording();
    h.keys.emit(&KeyEvent::new(KeyCode::ESCAPE, Modifiers::empty()));
    assert_eq!(h.core.current_chord(), None);
    assert_eq!(h.keys.subscriber_count(), 0);

    h.keys.emit(&KeyEvent::new(KeyCode::V, Modifiers::COMMAND | Modifiers::SHIFT));
    assert!(triggers.try_recv().is_err());
    assert!(h.store.load(CHORD_CONFIG_KEY).unwrap().is_none());
}

/// Emits the platform paste shortcut into the key source, like a real
/// keystroke synthesizer observed by a global monitor.
struct ShortcutInjector {
    keys: Arc<InMemoryKeyEventSource>,
}

impl PasteInjectorPort for ShortcutInjector {
    fn synthesize_paste(&self) -> anyhow::Result<()> {
        self.keys.emit(&KeyEvent::new(KeyCode::V, Modifiers::CONTROL));
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn synthesized_paste_does_not_fire_an_equal_chord() {
    init_tracing();
    let clipboard = Arc::new(InMemoryClipboardSource::new());
    let keys = Arc::new(InMemoryKeyEventSource::new());
    let core = HotclipCore::new(
        CoreDeps {
            clipboard: clipboard.clone(),
            paste_injector: Arc::new(ShortcutInjector { keys: keys.clone() }),
            key_source: keys.clone(),
            config_store: Arc::new(InMemoryConfigStore::new()),
            clock: Arc::new(FixedClock::new(0)),
        },
        &AppConfig::default(),
    );
    let mut triggers = core.subscribe_triggers();

    let control_v = ChordSpec::new(KeyCode::V, Modifiers::CONTROL);
    core.request_start_recording();
    keys.emit(&KeyEvent::new(KeyCode::V, Modifiers::CONTROL));
    assert_eq!(core.current_chord(), Some(control_v));

    clipboard.copy("snippet");
    core.engine().poll();
    let id = core.history_snapshot()[0].id().clone();

    core.request_paste(&id).await.unwrap();
    assert!(triggers.try_recv().is_err());

    keys.emit(&KeyEvent::new(KeyCode::V, Modifiers::CONTROL));
    assert_eq!(triggers.try_recv().unwrap().chord, control_v);
}
