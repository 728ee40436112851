//! Product API help prompt definition.

use super::PromptDefinition;

/// Asks the model to explain how to use the product API tools.
pub struct ProductApiHelpPrompt;

impl PromptDefinition for ProductApiHelpPrompt {
    const NAME: &'static str = "product_api_help";
    const DESCRIPTION: &'static str = "상품 API 사용 방법을 설명하는 프롬프트입니다.";

    fn text() -> &'static str {
        "상품 API를 사용하는 방법을 알려주세요. 사용 가능한 기능과 예시를 포함해 주세요."
    }
}
