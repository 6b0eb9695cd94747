use crate::config::TtsConfig;
use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

/// 语音播报能力，测试中可替换为假实现
pub trait Speaker {
    /// 播报文本，打断尚未播完的上一条
    fn speak(&self, text: &str) -> Result<(), String>;
}

#[cfg(target_os = "macos")]
const TTS_PROGRAM: &str = "say";
#[cfg(not(target_os = "macos"))]
const TTS_PROGRAM: &str = "espeak";

/// 调用系统 TTS 命令播报（Linux 用 espeak，macOS 用 say）
pub struct SystemSpeaker {
    language: String,
    volume: f32,
    available: bool,
    current: Mutex<Option<Child>>,
}

impl SystemSpeaker {
    pub fn new(config: &TtsConfig) -> Self {
        let available = probe();
        if available {
            log::info!("TTS 初始化成功（{TTS_PROGRAM}）");
        } else {
            log::error!("找不到 TTS 命令 {TTS_PROGRAM}，本次运行跳过所有播报");
        }
        Self {
            language: config.language.clone(),
            volume: config.volume,
            available,
            current: Mutex::new(None),
        }
    }
}

/// 探测系统 TTS 命令是否存在
fn probe() -> bool {
    Command::new(TTS_PROGRAM)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

impl Speaker for SystemSpeaker {
    fn speak(&self, text: &str) -> Result<(), String> {
        if !self.available {
            return Ok(());
        }

        let mut cmd = Command::new(TTS_PROGRAM);
        if cfg!(not(target_os = "macos")) {
            // espeak 音量范围 0-200，100 为正常
            let amplitude = (self.volume.clamp(0.0, 2.0) * 100.0) as u32;
            cmd.arg("-v")
                .arg(&self.language)
                .arg("-a")
                .arg(amplitude.to_string());
        }
        cmd.arg(text);

        // 打断上一条播报，与新播报互斥
        let mut current = self.current.lock().unwrap();
        if let Some(mut child) = current.take() {
            let _ = child.kill();
            let _ = child.wait();
        }

        let child = cmd
            .spawn()
            .map_err(|e| format!("启动 TTS 进程失败: {e}"))?;
        *current = Some(child);
        Ok(())
    }
}
