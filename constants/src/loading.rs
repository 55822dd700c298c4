/// Fixed progress milestones for the showcase loading pipeline.
///
/// Progress is a monotonically non-decreasing percentage partitioned into
/// three ordered phases: `[0, 50)` model, `[50, 90)` textures, `[90, 100]`
/// finalisation. The boundaries are contract, not configuration.

/// Reported once the model fetch has been dispatched, so the indicator never
/// appears to hang at zero.
pub const MODEL_DISPATCHED_PERCENT: u32 = 10;

/// Reached when the model itself has loaded; textures start here.
pub const MODEL_LOADED_PERCENT: u32 = 50;

/// Span of the texture phase; each settled texture advances a proportional
/// share of this span.
pub const TEXTURE_PHASE_SPAN: u32 = 40;

/// All textures settled, scene instantiation pending.
pub const TEXTURES_SETTLED_PERCENT: u32 = MODEL_LOADED_PERCENT + TEXTURE_PHASE_SPAN;

/// Terminal value on the success path.
pub const READY_PERCENT: u32 = 100;

pub const MODEL_PHASE_LABEL: &str = "Loading model";
pub const TEXTURE_PHASE_LABEL: &str = "Optimising textures";
pub const FINALISE_PHASE_LABEL: &str = "Finalising";
