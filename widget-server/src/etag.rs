//! 版本号与 HTTP 实体标签之间的转换
//!
//! - 输出：`ETag: "<version>"`（强标签，带引号的十进制整数）；
//! - 输入：`If-Match` 接受 `*`、`1`、`"1"` 与 `W/"1"`，不支持多个标签的列表。
//!
use crate::error::ApiError;
use axum::http::HeaderMap;
use axum::http::header::IF_MATCH;
use widget_application::Precondition;
use widget_domain::value_object::Version;

/// 将版本号格式化为 ETag 头的值
pub fn format_etag(version: u64) -> String {
    format!("\"{version}\"")
}

/// 从请求头中读取 `If-Match`，缺失时返回 `None`
pub fn if_match(headers: &HeaderMap) -> Result<Option<Precondition>, ApiError> {
    let Some(raw) = headers.get(IF_MATCH) else {
        return Ok(None);
    };
    let value = raw
        .to_str()
        .map_err(|_| ApiError::InvalidIfMatch("header is not visible ASCII".to_string()))?;
    parse_if_match(value).map(Some)
}

pub fn parse_if_match(value: &str) -> Result<Precondition, ApiError> {
    let trimmed = value.trim();
    if trimmed == "*" {
        return Ok(Precondition::Any);
    }

    let tag = trimmed.strip_prefix("W/").unwrap_or(trimmed);
    let tag = match (tag.strip_prefix('"'), tag.ends_with('"')) {
        (Some(rest), true) if !rest.is_empty() => &rest[..rest.len() - 1],
        (None, false) => tag,
        _ => return Err(ApiError::InvalidIfMatch(format!("malformed entity tag `{value}`"))),
    };

    tag.parse::<u64>()
        .map(|v| Precondition::Version(Version::from_value(v)))
        .map_err(|_| ApiError::InvalidIfMatch(format!("`{value}` is not a widget version")))
}
