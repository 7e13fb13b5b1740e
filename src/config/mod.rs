// ============================================================================
// Configuration Module
// Explicit rendering defaults passed by callers
// ============================================================================

mod render_config;

pub use render_config::RenderConfig;
