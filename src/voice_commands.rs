/// 固定的语音指令集
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// "开灯"
    TurnOn,
    /// "关灯"
    TurnOff,
}

impl Command {
    /// 精确匹配（文本需已经过 `chinese::clean_text` 清理）
    pub fn match_text(text: &str) -> Option<Command> {
        match text {
            "开灯" => Some(Command::TurnOn),
            "关灯" => Some(Command::TurnOff),
            _ => None,
        }
    }

    /// 指令对应的目标电源状态
    pub fn power_on(&self) -> bool {
        matches!(self, Command::TurnOn)
    }

    /// 播报的确认语
    pub fn confirmation(&self) -> &'static str {
        match self {
            Command::TurnOn => "灯已打开",
            Command::TurnOff => "灯已关闭",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_fixed_vocabulary() {
        assert_eq!(Command::match_text("开灯"), Some(Command::TurnOn));
        assert_eq!(Command::match_text("关灯"), Some(Command::TurnOff));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(Command::match_text(""), None);
        assert_eq!(Command::match_text("关灯。"), None);
        assert_eq!(Command::match_text("请关灯"), None);
        assert_eq!(Command::match_text("turn off"), None);
    }

    #[test]
    fn command_attributes() {
        assert!(Command::TurnOn.power_on());
        assert!(!Command::TurnOff.power_on());
        assert_eq!(Command::TurnOff.confirmation(), "灯已关闭");
        assert_eq!(Command::TurnOn.confirmation(), "灯已打开");
    }
}
