//! # 문자열 유틸리티
//!
//! 요청 필드 정리에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 사용자명 정규화
///
/// 저장과 중복 검사에 동일한 형태를 쓰도록 소문자로 맞춥니다.
pub fn normalize_username(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  JaneDoe "), "janedoe");
        assert_eq!(normalize_username("jane"), "jane");
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            email: Option<String>,
        }

        let body: Body = serde_json::from_str(r#"{"email": "  jane@x.com  "}"#).unwrap();
        assert_eq!(body.email, Some("jane@x.com".to_string()));

        let body: Body = serde_json::from_str(r#"{"email": "   "}"#).unwrap();
        assert_eq!(body.email, None);

        let body: Body = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(body.email, None);

        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.email, None);
    }
}
