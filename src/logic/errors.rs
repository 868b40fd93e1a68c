use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    NotFound,  // missing file or HTTP 404
    Malformed, // JSON that is not an array of movie records
    Network,   // connection, DNS, timeout, HTTP 5xx
    Other,
}

/// Classify a dataset load error based on its error chain
pub fn classify_error(error: &Error) -> ErrorType {
    if error.chain().any(|cause| cause.is::<serde_json::Error>()) {
        return ErrorType::Malformed;
    }

    if let Some(io_err) = error.chain().find_map(|cause| cause.downcast_ref::<std::io::Error>()) {
        if io_err.kind() == std::io::ErrorKind::NotFound {
            return ErrorType::NotFound;
        }
    }

    // Check for HTTP status codes (via reqwest error chain)
    if let Some(reqwest_err) = error.chain().find_map(|cause| cause.downcast_ref::<reqwest::Error>()) {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::Network,
                _ => ErrorType::Other,
            };
        }
        return ErrorType::Network;
    }

    let error_msg = format!("{:#}", error).to_lowercase();
    if error_msg.contains("connection refused")
        || error_msg.contains("timed out")
        || error_msg.contains("dns")
    {
        return ErrorType::Network;
    }

    ErrorType::Other
}

/// Short, human-readable summary for the status bar
pub fn describe_load_error(error: &Error) -> String {
    match classify_error(error) {
        ErrorType::NotFound => "Dataset not found".to_string(),
        ErrorType::Malformed => "Dataset is not a valid movie list".to_string(),
        ErrorType::Network => "Could not reach dataset server".to_string(),
        ErrorType::Other => format!("Failed to load dataset: {}", error),
    }
}
