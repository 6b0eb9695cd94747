pub mod chinese;
pub mod config;
pub mod dispatcher;
pub mod home_assistant;
pub mod tts;
pub mod ui;
pub mod voice_commands;

use dispatcher::{Dispatcher, Event};
use home_assistant::HomeAssistantClient;
use std::io::BufRead;
use std::time::Duration;
use tts::SystemSpeaker;
use ui::KeyboardUi;

pub fn run() {
    env_logger::init();

    let config = config::load_config().unwrap_or_else(|e| {
        log::error!("加载配置失败: {e}");
        panic!("配置加载失败: {e}");
    });

    let controller = HomeAssistantClient::new(&config.home_assistant).unwrap_or_else(|e| {
        log::error!("初始化 Home Assistant 客户端失败: {e}");
        panic!("客户端初始化失败: {e}");
    });
    let speaker = SystemSpeaker::new(&config.tts);

    let mut dispatcher = Dispatcher::new(
        controller,
        speaker,
        KeyboardUi,
        Duration::from_millis(config.trigger.debounce_ms),
        Duration::from_millis(config.trigger.wait_speak_ms),
    );

    log::info!(
        "开始监听识别事件（stdin 每行一个 JSON，如 {{\"text\":\"关灯\"}}，无文本时传 {{}}）"
    );

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("读取事件输入失败: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Event>(&line) {
            Ok(event) => dispatcher.handle_event(&event),
            Err(e) => log::error!("解析事件失败: {e}，原始内容: {line}"),
        }
    }

    log::info!("事件输入已结束，退出");
}
