use std::fmt;

/// Heuristic category assigned to a failed API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorHint {
    Authentication,
    RateLimit,
    Quota,
    Unclassified,
}

impl fmt::Display for ErrorHint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorHint::Authentication => write!(f, "authentication error"),
            ErrorHint::RateLimit => write!(f, "rate limit error"),
            ErrorHint::Quota => write!(f, "quota error"),
            ErrorHint::Unclassified => write!(f, "unclassified error"),
        }
    }
}

/// Classifies an error by searching its textual form for known markers.
/// Checked in order: authentication, rate limit, quota. Substring matching
/// is fragile against upstream wording changes, so an unmatched message
/// falls through to `Unclassified` rather than guessing.
pub fn classify(message: &str) -> ErrorHint {
    let lowered = message.to_lowercase();

    if message.contains("401") || lowered.contains("authentication") {
        ErrorHint::Authentication
    } else if message.contains("429") {
        ErrorHint::RateLimit
    } else if lowered.contains("insufficient_quota") {
        ErrorHint::Quota
    } else {
        ErrorHint::Unclassified
    }
}

/// Prints the user guidance matching a classified failure.
pub fn print_hint(hint: ErrorHint) {
    match hint {
        ErrorHint::Authentication => {
            println!("\n💡 This looks like an authentication error.");
            println!("   Please verify your API key is correct and has not expired.");
        }
        ErrorHint::RateLimit => {
            println!("\n💡 This looks like a rate limit error.");
            println!("   You may have exceeded your API rate limits.");
        }
        ErrorHint::Quota => {
            println!("\n💡 This looks like a quota error.");
            println!("   Please check your OpenAI account billing and quota.");
        }
        ErrorHint::Unclassified => {}
    }
}
