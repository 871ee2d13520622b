//! Build-time API configuration with an optional runtime override read from
//! `window.POSTBOARD_CONFIG`, so a static deployment can point at another API
//! without rebuilding. Values are public; do not store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("POSTBOARD_API_BASE_URL").unwrap_or("http://localhost:2000");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

/// Short git revision baked in by the build script.
pub fn build_sha() -> &'static str {
    option_env!("POSTBOARD_WEB_GIT_SHA")
        .filter(|sha| !sha.is_empty())
        .unwrap_or("unknown")
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("POSTBOARD_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    let value = Reflect::get(&object, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()?;
    Some(RuntimeConfig {
        api_base_url: normalize_runtime_value(&value),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value(" https://api.postboard.dev "),
            Some("https://api.postboard.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_only_when_present() {
        let mut config = AppConfig {
            api_base_url: "http://localhost:2000".to_string(),
        };
        apply_runtime_overrides(&mut config, RuntimeConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:2000");

        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                api_base_url: normalize_runtime_value("https://api.override"),
            },
        );
        assert_eq!(config.api_base_url, "https://api.override");
    }
}
