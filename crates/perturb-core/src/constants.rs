/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Field delimiter for full row identity keys.
pub const ROW_KEY_DELIMITER: &str = "*$*";

/// Item delimiter for list-valued fields inside a row identity key.
pub const ROW_KEY_LIST_DELIMITER: &str = "*&*";

/// Separator between source base and experiment type in a source token.
pub const SOURCE_TOKEN_SEPARATOR: &str = "*/*";

/// Field delimiter for configurable batch keys.
pub const BATCH_KEY_DELIMITER: &str = "::";

// --- Built-in measurement scales ---

/// Signed fold change: decreases are written as negative reciprocals.
pub const SCALE_FOLD_SIGNED: &str = "fold_signed";
/// Plain positive fold change.
pub const SCALE_FOLD_POSITIVE: &str = "fold_positive";
/// Delta-delta-CT from quantitative PCR.
pub const SCALE_DDCT: &str = "ddct";

/// Amplification efficiency used to turn a delta-delta-CT into fold change.
pub const DDCT_AMPLIFICATION_FACTOR: f64 = 1.94;

// --- Built-in perturbation technologies ---

pub const TECH_MASO: &str = "maso";
pub const TECH_MOE: &str = "moe";
pub const TECH_ENGRAILED: &str = "engrailed";
pub const TECH_VP16: &str = "vp16";
