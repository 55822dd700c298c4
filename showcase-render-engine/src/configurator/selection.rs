use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rpc::web_rpc::WebRpcInterface;
use constants::paint::{
    DEFAULT_COLOUR, FinishProfile, GLOSSY_PROFILE, MATTE_PROFILE, METALLIC_PROFILE,
};

/// Enumeration of paint finishes offered by the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintFinish {
    Glossy,
    #[default]
    Metallic,
    Matte,
}

impl PaintFinish {
    /// Convert string identifier to finish for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "glossy" => Some(Self::Glossy),
            "metallic" => Some(Self::Metallic),
            "matte" => Some(Self::Matte),
            _ => None,
        }
    }

    /// Convert finish to string identifier for frontend communication.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Glossy => "glossy",
            Self::Metallic => "metallic",
            Self::Matte => "matte",
        }
    }

    /// Fixed surface parameters for this finish.
    pub fn profile(self) -> FinishProfile {
        match self {
            Self::Glossy => GLOSSY_PROFILE,
            Self::Metallic => METALLIC_PROFILE,
            Self::Matte => MATTE_PROFILE,
        }
    }
}

/// The user's current paint choice. Session-scoped, never persisted.
///
/// No validation beyond type: any 24-bit colour is accepted, out-of-range
/// bits are a caller error rather than rejected here.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintSelection {
    pub colour: u32,
    pub finish: PaintFinish,
}

impl Default for PaintSelection {
    fn default() -> Self {
        Self {
            colour: DEFAULT_COLOUR,
            finish: PaintFinish::default(),
        }
    }
}

impl PaintSelection {
    /// The selected colour as a render colour (sRGB bytes).
    pub fn body_colour(&self) -> Color {
        colour_from_hex(self.colour)
    }
}

pub fn colour_from_hex(hex: u32) -> Color {
    Color::srgb_u8(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

#[derive(Debug, Clone, Copy)]
pub enum SelectionChange {
    Colour(u32),
    Finish(PaintFinish),
}

/// Source of a selection change for debugging and conditional logic.
#[derive(Debug, Clone, Copy)]
pub enum SelectionSource {
    Rpc,
    Keyboard,
}

/// Event fired when the paint selection changes via RPC or keyboard.
#[derive(Event)]
pub struct PaintSelectionEvent {
    pub change: SelectionChange,
    pub source: SelectionSource,
}

/// Single writer for `PaintSelection`.
///
/// Redundant events (re-selecting the current value) are dropped without
/// touching the resource, so change detection only fires on real changes.
pub fn handle_selection_events(
    mut events: EventReader<PaintSelectionEvent>,
    mut selection: ResMut<PaintSelection>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        let changed = match event.change {
            SelectionChange::Colour(colour) => {
                if selection.colour == colour {
                    false
                } else {
                    selection.colour = colour;
                    true
                }
            }
            SelectionChange::Finish(finish) => {
                if selection.finish == finish {
                    false
                } else {
                    selection.finish = finish;
                    true
                }
            }
        };

        if !changed {
            continue;
        }

        info!(
            "Paint selection changed ({:?}): colour #{:06x}, finish {}",
            event.source,
            selection.colour,
            selection.finish.as_str()
        );
        rpc_interface.send_notification(
            "selection_changed",
            serde_json::json!({
                "colour": selection.colour,
                "finish": selection.finish.as_str(),
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_app() -> App {
        let mut app = App::new();
        app.init_resource::<PaintSelection>()
            .init_resource::<WebRpcInterface>()
            .add_event::<PaintSelectionEvent>()
            .add_systems(Update, handle_selection_events);
        app
    }

    #[test]
    fn defaults_match_the_original_showcase() {
        let selection = PaintSelection::default();
        assert_eq!(selection.colour, 0xcfc7b0);
        assert_eq!(selection.finish, PaintFinish::Metallic);
    }

    #[test]
    fn finish_round_trips_through_strings() {
        for finish in [PaintFinish::Glossy, PaintFinish::Metallic, PaintFinish::Matte] {
            assert_eq!(PaintFinish::from_string(finish.as_str()), Some(finish));
        }
        assert_eq!(PaintFinish::from_string("MATTE"), Some(PaintFinish::Matte));
        assert_eq!(PaintFinish::from_string("chrome"), None);
    }

    #[test]
    fn finish_profiles_are_fixed_constants() {
        assert_eq!(PaintFinish::Glossy.profile(), GLOSSY_PROFILE);
        assert_eq!(PaintFinish::Metallic.profile().metallic, 0.9);
        assert_eq!(PaintFinish::Metallic.profile().perceptual_roughness, 0.1);
        assert_eq!(PaintFinish::Matte.profile().metallic, 0.1);
        assert_eq!(PaintFinish::Matte.profile().perceptual_roughness, 0.9);
    }

    #[test]
    fn events_mutate_the_selection_resource() {
        let mut app = selection_app();
        app.world_mut().send_event(PaintSelectionEvent {
            change: SelectionChange::Colour(0xdc2626),
            source: SelectionSource::Rpc,
        });
        app.world_mut().send_event(PaintSelectionEvent {
            change: SelectionChange::Finish(PaintFinish::Matte),
            source: SelectionSource::Keyboard,
        });
        app.update();

        let selection = app.world().resource::<PaintSelection>();
        assert_eq!(selection.colour, 0xdc2626);
        assert_eq!(selection.finish, PaintFinish::Matte);
    }

    #[test]
    fn any_24_bit_colour_is_accepted() {
        let mut app = selection_app();
        app.world_mut().send_event(PaintSelectionEvent {
            change: SelectionChange::Colour(0x123456),
            source: SelectionSource::Rpc,
        });
        app.update();
        assert_eq!(app.world().resource::<PaintSelection>().colour, 0x123456);
    }
}
