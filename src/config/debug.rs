//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All checks are further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (file drops, clears, button clicks).
    pub print_ui_interactions: bool,
    /// Emit request/response summaries for every HTTP call.
    pub print_http_traffic: bool,
    /// Emit a line whenever a stale prediction result is discarded.
    pub print_stale_results: bool,
    /// Emit series lengths and headline numbers after each successful prediction.
    pub print_forecast_summary: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_http_traffic: false,
    print_stale_results: true,
    print_forecast_summary: false,
    print_shutdown: false,
};
