/// Physically-based surface parameters for one paint finish.
///
/// Values are fixed presets, never derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinishProfile {
    pub metallic: f32,
    pub perceptual_roughness: f32,
}

/// High-gloss finish with deep reflections.
pub const GLOSSY_PROFILE: FinishProfile = FinishProfile {
    metallic: 0.3,
    perceptual_roughness: 0.2,
};

/// Premium metallic finish with sparkle effect.
pub const METALLIC_PROFILE: FinishProfile = FinishProfile {
    metallic: 0.9,
    perceptual_roughness: 0.1,
};

/// Sophisticated matte finish.
pub const MATTE_PROFILE: FinishProfile = FinishProfile {
    metallic: 0.1,
    perceptual_roughness: 0.9,
};

/// Paint colour the showcase starts with ("Gilver").
pub const DEFAULT_COLOUR: u32 = 0xcfc7b0;

pub struct PaletteEntry {
    pub name: &'static str,
    pub value: u32,
}

/// Curated exterior colours offered by the configurator panel.
///
/// The binder accepts any 24-bit value; this list is a UI convenience only.
pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        name: "Arctic White",
        value: 0xffffff,
    },
    PaletteEntry {
        name: "Gilver",
        value: 0xcfc7b0,
    },
    PaletteEntry {
        name: "Racing Red",
        value: 0xdc2626,
    },
    PaletteEntry {
        name: "Satin Teal",
        value: 0x1ecbe1,
    },
    PaletteEntry {
        name: "Titanium Silver",
        value: 0x94a3b8,
    },
    PaletteEntry {
        name: "Emerald Green",
        value: 0x059669,
    },
];
