use crate::chinese;
use crate::home_assistant::LightController;
use crate::tts::Speaker;
use crate::ui::UiController;
use crate::voice_commands::Command;
use serde::Deserialize;
use std::time::{Duration, Instant};

/// 识别事件：界面上没有识别文本控件时 `text` 为 None
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub text: Option<String>,
}

/// 冷却时间是否已过（`last` 为 None 表示从未发生过）
fn cooldown_elapsed(now: Instant, last: Option<Instant>, threshold: Duration) -> bool {
    match last {
        Some(t) => now.duration_since(t) >= threshold,
        None => true,
    }
}

/// 语音指令分发器
///
/// 持有两个独立的时间戳：`last_response` 防止同一指令被重复事件
/// 连续触发，`last_recognizing` 保证无文本状态刚结束时不立即触发，
/// 等识别界面稳定下来再响应。
pub struct Dispatcher<C, S, U> {
    controller: C,
    speaker: S,
    ui: U,
    debounce: Duration,
    wait_speak: Duration,
    last_response: Option<Instant>,
    last_recognizing: Option<Instant>,
}

impl<C, S, U> Dispatcher<C, S, U>
where
    C: LightController,
    S: Speaker,
    U: UiController,
{
    pub fn new(controller: C, speaker: S, ui: U, debounce: Duration, wait_speak: Duration) -> Self {
        Self {
            controller,
            speaker,
            ui,
            debounce,
            wait_speak,
            last_response: None,
            last_recognizing: None,
        }
    }

    /// 处理一个识别事件，事件在此同步处理完毕
    pub fn handle_event(&mut self, event: &Event) {
        self.handle_event_at(event, Instant::now());
    }

    /// 以给定时间处理事件，便于测试控制时钟
    pub fn handle_event_at(&mut self, event: &Event, now: Instant) {
        let cleaned = event.text.as_deref().map(chinese::clean_text);
        log::debug!("识别文本: {cleaned:?}");

        let Some(text) = cleaned else {
            // 当前没有识别文本，记下时间供宽限期判断
            self.last_recognizing = Some(now);
            return;
        };

        // 宽限期：无文本状态刚结束，界面可能尚未稳定
        if !cooldown_elapsed(now, self.last_recognizing, self.wait_speak) {
            return;
        }

        let Some(command) = Command::match_text(&text) else {
            return;
        };

        // 防抖：同一段识别文本会随界面刷新重复送达
        if !cooldown_elapsed(now, self.last_response, self.debounce) {
            return;
        }
        self.last_response = Some(now);

        log::debug!("触发指令: {command:?}");
        if let Err(e) = self.ui.navigate_back() {
            log::error!("返回手势失败: {e}");
        }
        match self.controller.set_power(command.power_on()) {
            Ok(resp) => log::info!("Home Assistant 响应: {resp}"),
            Err(e) => log::error!("调用 Home Assistant 失败: {e}"),
        }
        // 无论网络调用成败都播报
        if let Err(e) = self.speaker.speak(command.confirmation()) {
            log::error!("语音播报失败: {e}");
        }
    }
}
