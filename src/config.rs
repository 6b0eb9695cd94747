use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub home_assistant: HomeAssistantConfig,
    #[serde(default)]
    pub trigger: TriggerConfig,
    #[serde(default)]
    pub tts: TtsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeAssistantConfig {
    /// Home Assistant 地址，如 "http://homeassistant.local:8123"
    pub url: String,
    /// 长期访问令牌
    pub token: String,
    /// 目标灯具，如 "light.bedroom"
    pub entity_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// 同一指令的防抖间隔（毫秒）
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// 无识别文本后到允许触发的等待间隔（毫秒）
    #[serde(default = "default_wait_speak_ms")]
    pub wait_speak_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// 播报语言，传给系统 TTS 命令
    #[serde(default = "default_tts_language")]
    pub language: String,
    /// 播报音量，1.0 为正常音量
    #[serde(default = "default_tts_volume")]
    pub volume: f32,
}

fn default_debounce_ms() -> u64 {
    3000
}
fn default_wait_speak_ms() -> u64 {
    2000
}
fn default_tts_language() -> String {
    "zh".to_string()
}
fn default_tts_volume() -> f32 {
    1.0
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            wait_speak_ms: default_wait_speak_ms(),
        }
    }
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            language: default_tts_language(),
            volume: default_tts_volume(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voice-trigger");
    config_dir.join("config.toml")
}

/// 加载配置，文件不存在则创建默认配置
pub fn load_config() -> Result<AppConfig, String> {
    let path = config_path();
    if path.exists() {
        let content = fs::read_to_string(&path).map_err(|e| format!("读取配置失败: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("解析配置失败: {e}"))
    } else {
        let config = default_config();
        save_config(&config)?;
        Ok(config)
    }
}

/// 保存配置到文件
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("创建配置目录失败: {e}"))?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| format!("序列化配置失败: {e}"))?;
    fs::write(&path, content).map_err(|e| format!("写入配置失败: {e}"))?;
    Ok(())
}

/// 默认配置（地址与令牌为占位值，需要手动填写）
fn default_config() -> AppConfig {
    AppConfig {
        home_assistant: HomeAssistantConfig {
            url: "http://homeassistant.local:8123".to_string(),
            token: "your-long-lived-access-token".to_string(),
            entity_id: "light.bedroom".to_string(),
        },
        trigger: TriggerConfig::default(),
        tts: TtsConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [home_assistant]
            url = "http://192.168.1.2:8123"
            token = "abc"
            entity_id = "light.desk"
            "#,
        )
        .unwrap();
        assert_eq!(config.trigger.debounce_ms, 3000);
        assert_eq!(config.trigger.wait_speak_ms, 2000);
        assert_eq!(config.tts.language, "zh");
        assert_eq!(config.tts.volume, 1.0);
    }

    #[test]
    fn default_config_roundtrips() {
        let config = default_config();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.home_assistant.entity_id, config.home_assistant.entity_id);
        assert_eq!(parsed.trigger.debounce_ms, config.trigger.debounce_ms);
    }
}
