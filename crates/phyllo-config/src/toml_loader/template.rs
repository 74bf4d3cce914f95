//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Phyllo Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[sphere]
# points = 1000          # 10-5000, step 10
# radius = 15.0          # 5-30, step 0.5
# point_size = 0.15      # 0.01-1.0, step 0.01
# rotation_speed = 0.2   # 0-2, step 0.05
# show_lines = false
# color_scheme = "golden"  # golden | rainbow | cyber

[theme]
mode = "dark"            # dark | light
# custom = "ocean"       # theme name or path to a YAML palette file

[ai]
# model = "gemini-2.5-flash"
# temperature = 0.7      # 0.0-2.0, used for one-shot insights
# max_tokens = 2048
# api_key_env = "GEMINI_API_KEY"   # API_KEY is tried when this is unset

[logging]
# level = "info"         # trace | debug | info | warn | error
"##
}
