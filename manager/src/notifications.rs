use std::fmt::Display;

use crate::form::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Invalid(ValidationError),
    Added,
    Updated,
    Deleted,
    EditStarted,
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Invalid(_) => NotificationKind::Error,
            Notification::Added | Notification::Updated | Notification::Deleted => {
                NotificationKind::Success
            }
            Notification::EditStarted => NotificationKind::Info,
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::Invalid(err) => write!(f, "{}", err),
            Notification::Added => write!(f, "Student added!"),
            Notification::Updated => write!(f, "Student updated!"),
            Notification::Deleted => write!(f, "Student deleted!"),
            Notification::EditStarted => write!(f, "Editing student..."),
        }
    }
}

/// Receives fire-and-forget outcomes of form actions.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<F> Notifier for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// Holds notifications until the presentation layer shows them.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        match notification.kind() {
            NotificationKind::Error => log::warn!("{}", notification),
            _ => log::info!("{}", notification),
        }
        self.pending.push(notification);
    }
}
