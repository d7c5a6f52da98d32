use crate::judge::JudgeService;
use crate::model::{ChatMessage, ChatRequest};

pub(crate) async fn call_judge_impl(
    svc: &JudgeService,
    messages: Vec<ChatMessage>,
    temperature: f64,
) -> anyhow::Result<String> {
    let request = ChatRequest {
        model: svc.config.model.clone(),
        temperature,
        messages,
    };
    let resp = svc.client.complete(&request).await?;
    Ok(resp.text)
}
