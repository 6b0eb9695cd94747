use enigo::{Direction, Enigo, Key, Keyboard, Settings};

/// 宿主界面操作能力，测试中可替换为假实现
pub trait UiController {
    /// 发出"返回"手势，收起识别界面
    fn navigate_back(&self) -> Result<(), String>;
}

/// 通过模拟按键（Escape）实现返回手势
pub struct KeyboardUi;

impl UiController for KeyboardUi {
    fn navigate_back(&self) -> Result<(), String> {
        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| format!("初始化 enigo 失败: {e}"))?;
        enigo
            .key(Key::Escape, Direction::Click)
            .map_err(|e| format!("发送返回按键失败: {e}"))?;
        Ok(())
    }
}
