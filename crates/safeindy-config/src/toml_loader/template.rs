//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# SafeIndy client configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[service]
# base_url = "http://127.0.0.1:5000"   # SAFEINDY_URL overrides this
# chat_path = "/api/chat"
# connect_timeout_secs = 10            # 1-60
# request_timeout_secs = 30            # 1-300
# offline = false                      # answer with the built-in assistant

[session]
# greeting_action = "greeting"
# fallback_reply = "Sorry, I encountered an error. Please try again."
# event_capacity = 64                  # 1-4096

[logging]
# level = "info"                       # trace, debug, info, warn, error
"#
}
