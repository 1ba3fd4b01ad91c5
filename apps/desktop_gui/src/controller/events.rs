//! UI/backend events and error modeling for desktop GUI controller.

pub enum UiEvent {
    /// Status line text.
    Info(String),
    /// Shown as a modal notice the user has to dismiss.
    Notice(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn banner_text(&self) -> String {
        let prefix = match (self.context(), self.category()) {
            (UiErrorContext::BackendStartup, _) => "Backend unavailable",
            (UiErrorContext::CommandQueue, UiErrorCategory::Transport) => "Backend disconnected",
            (UiErrorContext::CommandQueue, UiErrorCategory::Unknown) => "Request not queued",
        };
        format!("{prefix}: {}", self.message())
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
