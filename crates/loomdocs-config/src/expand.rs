//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Only braced references are expanded; any other `$` is copied as is, so
/// URLs containing a literal `$` survive. An unterminated `${` is kept
/// literally too. `field` is the config path reported when a variable is
/// unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        let reference = shellexpand::env(&rest[start..end]).map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })?;
        expanded.push_str(&reference);
        rest = &rest[end..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}
