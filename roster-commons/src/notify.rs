#[cfg(test)]
use mockall::automock;

/// Fallback when a remote failure carries no usable message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// Display seam for user-visible outcome messages. Purely a side effect,
/// never part of control flow.
#[cfg_attr(test, automock)]
pub trait Notify {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

pub fn report_saved(notifier: &dyn Notify, count: usize) {
    notifier.notify(
        "Success",
        &format!("{} contact(s) created successfully.", count),
        Severity::Success,
    );
}

pub fn report_updated(notifier: &dyn Notify) {
    notifier.notify("Success", "Contacts updated successfully.", Severity::Success);
}

pub fn report_failure(notifier: &dyn Notify, title: &str, message: Option<&str>) {
    notifier.notify(title, message.unwrap_or(UNKNOWN_ERROR), Severity::Error);
}

#[cfg(test)]
mod notify_tests {
    use super::*;
    use mockall::predicate;

    #[test]
    fn saved_report_carries_the_count() {
        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .with(
                predicate::eq("Success"),
                predicate::eq("2 contact(s) created successfully."),
                predicate::eq(Severity::Success),
            )
            .times(1)
            .return_const(());

        report_saved(&notifier, 2);
    }

    #[test]
    fn failure_report_surfaces_the_remote_message() {
        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .with(
                predicate::eq("Error creating contacts"),
                predicate::eq("DUPLICATE_EMAIL"),
                predicate::eq(Severity::Error),
            )
            .times(1)
            .return_const(());

        report_failure(&notifier, "Error creating contacts", Some("DUPLICATE_EMAIL"));
    }

    #[test]
    fn failure_report_falls_back_when_no_message_is_supplied() {
        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .with(
                predicate::eq("Error updating contacts"),
                predicate::eq(UNKNOWN_ERROR),
                predicate::eq(Severity::Error),
            )
            .times(1)
            .return_const(());

        report_failure(&notifier, "Error updating contacts", None);
    }
}
