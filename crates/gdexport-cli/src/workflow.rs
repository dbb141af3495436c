//! Workflow commands understood by the CI runner (`::name props::message`).

/// Escape a command message.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format a workflow command line.
pub fn command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let props = properties
        .iter()
        .map(|(k, v)| format!("{k}={}", escape_property(v)))
        .collect::<Vec<_>>()
        .join(",");
    if props.is_empty() {
        format!("::{name}::{}", escape_data(message))
    } else {
        format!("::{name} {props}::{}", escape_data(message))
    }
}

pub fn warning(message: &str) -> String {
    command("warning", &[], message)
}

pub fn error(message: &str) -> String {
    command("error", &[], message)
}

/// Legacy `set-output` command, for runners without an output file.
pub fn set_output(name: &str, value: &str) -> String {
    command("set-output", &[("name", name)], value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_and_error() {
        assert_eq!(warning("careful"), "::warning::careful");
        assert_eq!(error("boom"), "::error::boom");
    }

    #[test]
    fn test_message_escaping() {
        assert_eq!(warning("50%\nnext\rline"), "::warning::50%25%0Anext%0Dline");
    }

    #[test]
    fn test_set_output() {
        assert_eq!(
            set_output("windows_artifact", "My Game.zip"),
            "::set-output name=windows_artifact::My Game.zip"
        );
    }

    #[test]
    fn test_property_escaping() {
        assert_eq!(
            command("notice", &[("title", "a:b,c")], "msg"),
            "::notice title=a%3Ab%2Cc::msg"
        );
    }
}
