use std::path::Path;

use tracing::debug;

/// 知识库中找不到答案时模型必须原样返回的兜底句
pub const FALLBACK_REPLY: &str =
    "I don't have that information. Please contact our team directly for assistance.";

/// 读取 FAQ 知识库全文，每次请求都重新读取，不做缓存
pub async fn load_faq(path: impl AsRef<Path>) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await
}

/// 组装系统提示词：人设 + 规则 + 原样嵌入的知识库
pub fn build_system_prompt(faq_content: &str) -> String {
    format!(
        r#"
You are a helpful and professional assistant for [Company Name],
a consultancy firm specializing in Agriculture, Economics, and Climate services.

Your job is to answer customer questions based ONLY on the company knowledge
base provided below. Follow these rules strictly:

1. Only answer questions related to the company's services.
2. If the answer is clearly in the knowledge base, answer it helpfully.
3. If the question is not covered in the knowledge base, respond with:
   "{FALLBACK_REPLY}"
4. Do not make up information or answer questions outside the company's services.
5. Keep your answers clear, friendly, and professional.
6. Do not mention that you are an AI or that you are using a knowledge base.

COMPANY KNOWLEDGE BASE:
{faq_content}
"#
    )
}

pub async fn system_prompt_from_file(path: impl AsRef<Path>) -> std::io::Result<String> {
    let faq = load_faq(path).await?;
    let prompt = build_system_prompt(&faq);
    debug!("系统提示词已生成: faq_len={}, prompt_len={}", faq.len(), prompt.len());
    Ok(prompt)
}
