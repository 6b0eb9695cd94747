use crate::config::HomeAssistantConfig;
use serde::Serialize;

/// 调用服务的请求体
#[derive(Debug, Serialize)]
struct ServiceCall {
    entity_id: String,
}

/// 灯光控制能力，测试中可替换为假实现
pub trait LightController {
    /// 设置灯的开关状态，返回原始响应文本
    fn set_power(&self, on: bool) -> Result<String, String>;
}

/// 通过 Home Assistant REST API 控制灯光
pub struct HomeAssistantClient {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    base_url: String,
    token: String,
    entity_id: String,
}

impl HomeAssistantClient {
    pub fn new(config: &HomeAssistantConfig) -> Result<Self, String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| format!("创建 tokio 运行时失败: {e}"))?;
        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            entity_id: config.entity_id.clone(),
        })
    }
}

impl LightController for HomeAssistantClient {
    fn set_power(&self, on: bool) -> Result<String, String> {
        let service = if on { "turn_on" } else { "turn_off" };
        let url = format!("{}/api/services/light/{}", self.base_url, service);

        // 事件在回调内同步处理完毕，这里直接阻塞等待请求结束
        self.runtime.block_on(async {
            let resp = self
                .client
                .post(&url)
                .bearer_auth(&self.token)
                .json(&ServiceCall {
                    entity_id: self.entity_id.clone(),
                })
                .send()
                .await
                .map_err(|e| format!("请求 Home Assistant 失败: {e}"))?;

            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| format!("读取响应失败: {e}"))?;

            if !status.is_success() {
                return Err(format!("Home Assistant 返回错误状态: {status}，响应: {body}"));
            }

            Ok(body)
        })
    }
}
