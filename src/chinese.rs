/// 匹配前需要清理掉的中文标点
const CHINESE_PUNCTUATION: &str = "，。；：！“”‘’《》？【】（）——、";

/// 去掉中文标点并去除首尾空白
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| !CHINESE_PUNCTUATION.contains(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
