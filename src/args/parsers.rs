use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_usize(s: &str) -> AppResult<usize> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|source| AppError::validation(ValidationError::InvalidNumber { source }))?;
    if value == 0 {
        return Err(AppError::validation(ValidationError::ValueTooSmall {
            min: 1,
        }));
    }
    Ok(value)
}

pub(super) fn parse_positive_u32(s: &str) -> AppResult<u32> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|source| AppError::validation(ValidationError::InvalidNumber { source }))?;
    if value == 0 {
        return Err(AppError::validation(ValidationError::ValueTooSmall {
            min: 1,
        }));
    }
    Ok(value)
}

/// Splits a `;`-separated proxy list, rejecting empty entries.
///
/// # Errors
///
/// Returns `EmptyProxyList` for a blank argument and `EmptyProxyUri` when
/// any entry between separators is empty.
pub(crate) fn parse_proxy_list(s: &str) -> AppResult<Vec<String>> {
    if s.trim().is_empty() {
        return Err(AppError::validation(ValidationError::EmptyProxyList));
    }
    let mut proxies = Vec::new();
    for entry in s.split(';') {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyProxyUri));
        }
        proxies.push(trimmed.to_owned());
    }
    Ok(proxies)
}
