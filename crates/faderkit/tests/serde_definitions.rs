//! Parameter definitions loaded from JSON.
#![cfg(feature = "serde")]

use faderkit::prelude::*;

#[test]
fn load_parameter_manifest() {
    let json = r#"[
        {"type": "continuous", "id": "cutoff", "name": "Cutoff", "min": 20.0, "max": 20000.0,
         "unit": "Hz", "scale": {"type": "log", "base": 1000.0}, "midiResolution": 14},
        {"type": "boolean", "id": "sync", "name": "Sync", "mode": "toggle"},
        {"type": "discrete", "id": "wave", "name": "Wave", "midiMapping": "spread",
         "options": [{"value": "sine", "label": "Sine"}, {"value": "saw", "label": "Saw"}]}
    ]"#;

    let parameters: Vec<AudioParameter> = serde_json::from_str(json).unwrap();
    assert_eq!(parameters.len(), 3);

    for parameter in &parameters {
        let converter = AudioParameterConverter::new(parameter.clone()).unwrap();
        let midi = converter.to_midi(&parameter.default_value());
        assert!(midi <= converter.max_midi());
    }

    assert_eq!(parameters[0].midi_resolution(), MidiResolution::Bits14);
    assert_eq!(parameters[1].midi_resolution(), MidiResolution::Bits32);
}

#[test]
fn unknown_kind_is_rejected() {
    let json = r#"{"type": "xy-pad", "id": "pad", "name": "Pad"}"#;
    assert!(serde_json::from_str::<AudioParameter>(json).is_err());
}
