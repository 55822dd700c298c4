/// Substring vocabulary identifying paintable body meshes.
///
/// A scene node is treated as body paint when its own name or its material's
/// name contains any of these tokens (case-insensitive). The list follows the
/// asset-authoring conventions of the shipped car model; unmatched body
/// meshes are a silent visual defect, so extend this list when swapping
/// assets rather than renaming meshes.
pub const BODY_NAME_TOKENS: &[&str] = &[
    "carpaint_base",
    "carpaint",
    "body",
    "paint",
    "exterior",
    "shell",
    "car",
];
