use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// User-visible outcome of a calculation, export or email action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }

    pub fn calculation_error() -> Self {
        Self::failure(
            "Calculation Error",
            "There was an error calculating the runway. Please check your inputs and try again.",
        )
    }

    pub fn report_exported(path: &str) -> Self {
        Self::success(
            "Report Exported",
            format!("Your runway analysis has been written to {path}"),
        )
    }

    pub fn export_error() -> Self {
        Self::failure(
            "Export Error",
            "There was an error exporting the report. Please try again.",
        )
    }

    pub fn email_sent(address: &str) -> Self {
        Self::success(
            "Email Sent Successfully!",
            format!("The runway analysis has been sent to {address}"),
        )
    }

    pub fn email_failed() -> Self {
        Self::failure(
            "Failed to Send Email",
            "There was an error sending your email. Please try again later.",
        )
    }

    pub fn invalid_email() -> Self {
        Self::failure("Invalid Email", "Please enter a valid email address.")
    }

    /// Prints to stdout, or stderr for failures.
    pub fn emit(&self) {
        if self.is_failure() {
            eprintln!("{self}");
        } else {
            println!("{self}");
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
