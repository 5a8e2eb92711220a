use std::fmt;

/// Priority label chosen when a task is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    #[default]
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Medium => Self::High,
            Self::Low => Self::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    text: String,
    priority: Priority,
    pub completed: bool,
}

impl Task {
    /// Callers are responsible for passing trimmed, non-empty text.
    pub(crate) const fn new(text: String, priority: Priority) -> Self {
        Self {
            text,
            priority,
            completed: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Row text shown in the list: `"{text} ({priority})"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.text(), self.priority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_text_then_priority_in_parens() {
        let task = Task::new("Pay bills".to_string(), Priority::High);
        assert_eq!(task.label(), "Pay bills (High)");

        let task = Task::new("a".to_string(), Priority::Medium);
        assert_eq!(task.label(), "a (Medium)");
    }

    #[test]
    fn label_does_not_change_when_completed() {
        let mut task = Task::new("Wash car".to_string(), Priority::Low);
        task.completed = true;
        assert_eq!(task.label(), "Wash car (Low)");
    }

    #[test]
    fn default_priority_is_first_selector_option() {
        assert_eq!(Priority::default(), Priority::High);
    }

    #[test]
    fn priority_cycles_both_ways() {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(priority.next().previous(), priority);
        }
        assert_eq!(Priority::Low.next(), Priority::High);
        assert_eq!(Priority::High.previous(), Priority::Low);
    }
}
