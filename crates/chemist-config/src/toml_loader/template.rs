//! Default config file content.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Chemist Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# key = ""                 # prefer the environment variable below
# key_env = "GEMINI_API_KEY"
# base_url = "https://generativelanguage.googleapis.com"
# model = "gemini-2.0-flash"
# timeout_secs = 0         # 0 = wait indefinitely, max 3600

[session]
# rollback_failed_turns = false

[persona]
# greeting = "..."
# instructions = "..."

[display]
# wrap_width = 0           # 0 = terminal width, otherwise 20-500
# color = true

[logging]
# level = "warn"           # trace, debug, info, warn, error
"##
}
