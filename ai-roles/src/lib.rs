//! Role dispatch for single-turn completions.
//!
//! A request names an [`AiRole`]; [`resolve`] turns it (plus free-form
//! [`RoleOptions`]) into a system instruction, a temperature and a
//! [`PostProcess`] rule, and [`post_process`] shapes the model's reply.
//! Nothing here performs I/O.
//!
//! ```
//! use ai_roles::{AiRole, PostProcess, RoleOptions, RoleOutput, post_process, resolve};
//!
//! let plan = resolve(AiRole::ColorGenerator, &RoleOptions::default());
//! assert_eq!(plan.post_process, PostProcess::ColorJson);
//!
//! let out = post_process(plan.post_process, r#"Sure: {"css_code": "255, 0, 0"}"#);
//! assert!(matches!(out.result, RoleOutput::Color(ref c) if c.css_code == "#ff0000"));
//! ```

pub mod color;
pub mod instruction;
pub mod language;
pub mod presets;
pub mod reply;
pub mod role;

pub use color::{ColorResult, DEFAULT_COLOR, Rgb, contrast_color, hex_to_rgb, normalize_color};
pub use instruction::{PostProcess, ResolvedInstruction, RoleOptions, resolve};
pub use language::{LanguageInfo, TargetLanguage, languages};
pub use presets::{PRESETS, PersonaPreset, find_preset};
pub use reply::{COLOR_PARSE_SOFT_ERROR, Processed, RoleOutput, post_process};
pub use role::{AiRole, RoleError};
