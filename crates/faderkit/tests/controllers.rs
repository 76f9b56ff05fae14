//! End-to-end flows: UI gestures through controllers into MIDI values.

use std::cell::RefCell;
use std::rc::Rc;

use faderkit::prelude::*;

#[test]
fn knob_drag_feeds_midi_output() {
    let cutoff = ContinuousParameter::new("cutoff", "Cutoff", 20.0..=20000.0)
        .with_unit("Hz")
        .with_scale(Scale::log(1000.0))
        .with_resolution(MidiResolution::Bits14)
        .with_default(1000.0);
    let converter = AudioParameterConverter::new(cutoff.clone()).unwrap();

    let sent = Rc::new(RefCell::new(Vec::new()));
    let sink = sent.clone();
    let output = converter.clone();
    let mut knob = ContinuousInteractionController::new(
        cutoff,
        ContinuousControllerConfig::new(20.0)
            .with_on_value_change(move |v| sink.borrow_mut().push(output.to_midi(&RealValue::Number(v)))),
    )
    .unwrap();

    for _ in 0..10 {
        knob.handle_drag(20.0, false);
    }
    knob.handle_drag(1000.0, false);

    let sent = sent.borrow();
    assert!(sent.windows(2).all(|w| w[0] <= w[1]), "drag up never lowers MIDI output");
    assert_eq!(*sent.last().unwrap(), converter.max_midi());
}

#[test]
fn host_automation_resyncs_controller() {
    let volume = create_midi_standard_7bit("Volume");
    let converter = AudioParameterConverter::new(volume.clone()).unwrap();
    let mut fader = ContinuousInteractionController::new(volume, ContinuousControllerConfig::new(0.0)).unwrap();

    let automated = converter.from_midi(100).as_number().unwrap();
    fader.update_config(ContinuousControllerConfig::new(automated));
    assert_eq!(fader.value(), 100.0);

    assert!(fader.handle_key_down("ArrowUp"));
    assert_eq!(fader.value(), 101.0);
}

#[test]
fn keyboard_glissando_and_cancel() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let on = events.clone();
    let off = events.clone();
    let mut keys = NoteInteractionController::new(
        NoteControllerConfig::new()
            .with_on_note_on(move |n| on.borrow_mut().push(("on", n)))
            .with_on_note_off(move |n| off.borrow_mut().push(("off", n))),
    );

    keys.handle_pointer_down(1, Some(60));
    keys.handle_pointer_move(1, Some(61));
    keys.handle_pointer_move(1, Some(62));
    keys.handle_pointer_down(2, Some(48));
    keys.cancel_all();

    assert_eq!(
        *events.borrow(),
        vec![
            ("on", 60),
            ("off", 60),
            ("on", 61),
            ("off", 61),
            ("on", 62),
            ("on", 48),
            ("off", 62),
            ("off", 48),
        ]
    );
}

#[test]
fn switch_through_converter_and_formatter() {
    let bypass = create_switch("Bypass");
    let parameter = AudioParameter::from(bypass);
    let converter = AudioParameterConverter::new(parameter.clone()).unwrap();

    assert_eq!(converter.to_midi(&RealValue::Bool(true)), 127);
    assert_eq!(converter.from_midi(64), RealValue::Bool(true));
    assert_eq!(converter.from_midi(63), RealValue::Bool(false));
    assert_eq!(format_value(&parameter, &converter.from_midi(127)), "On");
    assert_eq!(parse_value(&parameter, "off"), Some(RealValue::Bool(false)));
}

#[test]
fn invalid_definitions_are_rejected() {
    let empty = create_selector("Empty", Vec::new());
    assert!(matches!(
        AudioParameterConverter::new(empty),
        Err(ConfigError::EmptyOptions { .. })
    ));

    let backwards = ContinuousParameter::new("x", "X", 10.0..=0.0);
    assert!(matches!(
        AudioParameterConverter::new(backwards),
        Err(ConfigError::InvalidRange { .. })
    ));
}
