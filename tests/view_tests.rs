use annotator::kernel::event::Event;
use annotator::kernel::machine::TrialMachine;
use annotator::kernel::state::Notice;
use annotator::kernel::view::View;
use annotator::surface::text::render_text;
use annotator::{PlayerConfig, VideoRef};

fn project(m: &TrialMachine, config: &PlayerConfig) -> View {
    View::project(m.state(), m.mode(), &config.text)
}

#[test]
fn test_playing_view_locks_entry() {
    let config = PlayerConfig::default();
    let m = TrialMachine::new(VideoRef::new("clip.mp4"), &config);
    let view = project(&m, &config);

    assert!(view.video_visible);
    assert!(!view.native_controls);
    assert!(!view.entry_enabled && !view.add_enabled && !view.submit_enabled);
    assert!(view.shows(Notice::PauseHint));
    assert_eq!(view.notices[0].text, config.text.pause_hint);
    assert!(!view.notices[0].is_error);
}

#[test]
fn test_submit_enabled_iff_pending_nonempty() {
    let config = PlayerConfig::default();
    let mut m = TrialMachine::new(VideoRef::new("clip.mp4"), &config);
    m.step(Event::paused_at(3.0));

    let view = project(&m, &config);
    assert!(view.entry_enabled && view.add_enabled);
    assert!(!view.submit_enabled);

    let steps = [
        (Event::add("calm"), vec!["calm"], true),
        (Event::add("direct"), vec!["calm", "direct"], true),
        (Event::remove("calm"), vec!["direct"], true),
        (Event::add("calm"), vec!["direct", "calm"], true),
        (Event::remove("direct"), vec!["calm"], true),
        (Event::remove("calm"), vec![], false),
    ];
    for (event, words, submit) in steps {
        m.step(event);
        let view = project(&m, &config);
        assert_eq!(view.pending_words(), words);
        assert_eq!(view.submit_enabled, submit);
        assert!(view.pending.iter().all(|entry| entry.removable));
    }
}

#[test]
fn test_projection_is_deterministic() {
    let config = PlayerConfig::default();
    let mut m = TrialMachine::new(VideoRef::new("clip.mp4"), &config);
    m.step(Event::paused_at(3.0));
    m.step(Event::add("calm"));
    m.step(Event::add("calm"));

    assert_eq!(project(&m, &config), project(&m, &config));
}

#[test]
fn test_error_view_hides_video() {
    let config = PlayerConfig::default();
    let mut m = TrialMachine::new(VideoRef::new("clip.mp4"), &config);
    m.step(Event::paused_at(3.0));
    m.step(Event::add("calm"));
    m.step(Event::media_error("404"));

    let view = project(&m, &config);
    assert!(!view.video_visible);
    assert!(!view.entry_enabled && !view.add_enabled && !view.submit_enabled);
    assert!(view.pending.is_empty());
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].text, config.text.video_error);
    assert!(view.notices[0].is_error);
}

#[test]
fn test_native_controls_flag_projected() {
    let config = PlayerConfig {
        show_native_controls: true,
        ..PlayerConfig::default()
    };
    let m = TrialMachine::new(VideoRef::new("clip.mp4"), &config);
    assert!(project(&m, &config).native_controls);
}

#[test]
fn test_text_rendering() {
    let config = PlayerConfig::default();
    let mut m = TrialMachine::new(VideoRef::new("clip.mp4"), &config);
    m.step(Event::paused_at(3.0));
    m.step(Event::add("calm"));
    m.step(Event::add("direct"));

    let text = render_text(&project(&m, &config));
    assert!(text.contains("[video: click to pause]"));
    assert!(text.contains("words: calm [x], direct [x]"));
    assert!(text.contains(&config.text.cannot_unpause));
    assert!(text.contains("Submit Word List: enabled"));
}
