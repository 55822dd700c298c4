use bevy::prelude::*;

use crate::configurator::selection::{
    PaintFinish, PaintSelectionEvent, SelectionChange, SelectionSource,
};
use constants::paint::PALETTE;

const FINISH_KEYS: [(KeyCode, PaintFinish); 3] = [
    (KeyCode::KeyG, PaintFinish::Glossy),
    (KeyCode::KeyM, PaintFinish::Metallic),
    (KeyCode::KeyT, PaintFinish::Matte),
];

const COLOUR_KEYS: [KeyCode; 6] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

/// Native-only parity for the RPC control surface: digits pick palette
/// colours, letters pick finishes.
pub fn handle_paint_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<PaintSelectionEvent>,
) {
    for (index, key) in COLOUR_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            events.write(PaintSelectionEvent {
                change: SelectionChange::Colour(PALETTE[index].value),
                source: SelectionSource::Keyboard,
            });
        }
    }

    for (key, finish) in FINISH_KEYS {
        if keys.just_pressed(key) {
            events.write(PaintSelectionEvent {
                change: SelectionChange::Finish(finish),
                source: SelectionSource::Keyboard,
            });
        }
    }
}
