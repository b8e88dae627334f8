use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task. Serialized as a bare JSON number so that lists
/// written by earlier versions of the page load unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Builds an open task from raw input, or `None` when the input is
    /// empty after trimming.
    pub fn from_input(id: TaskId, input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_trims_and_starts_open() {
        let task = Task::from_input(TaskId(7), "  Buy milk \n").expect("non-empty input");
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn from_input_rejects_blank_text() {
        assert!(Task::from_input(TaskId(1), "").is_none());
        assert!(Task::from_input(TaskId(1), " \t\n ").is_none());
    }

    #[test]
    fn serializes_in_stored_shape() {
        let task = Task {
            id: TaskId(1700000000000),
            text: "Write report".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&task).expect("serialize");
        assert_eq!(json, r#"{"id":1700000000000,"text":"Write report","completed":true}"#);
    }
}
