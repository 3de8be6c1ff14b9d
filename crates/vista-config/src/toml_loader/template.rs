//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Vista Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[chrome]
# noise_threshold = 3.0         # px, 0-50
# activation_threshold = 30.0   # px, 0-1000
# chrome_height = 56.0          # px, 1-400
# reset_at_top = false          # show chrome whenever content hits the top
# track_ignored_samples = true

[sticky]
# threshold = 120.0             # px, 0-5000

[boundary]
# distance = 300.0              # px, 0-10000
# dead_zone = 10.0              # px, 0-100

[gesture]
# momentum_velocity_threshold = 0.05   # px/ms
# settle_timeout_ms = 120              # 0-2000

[animation]
# stiffness = 170.0
# damping = 26.0
# mass = 1.0
# rest_threshold = 0.5          # 0-10

[touch_guard]
# enabled = true
# window_ms = 350               # 0-5000

[logging]
# level = "INFO"                # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
