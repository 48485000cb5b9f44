use serde::{Deserialize, Serialize};
use std::fmt;

/// What the agent should do with the submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Task {
    #[default]
    Translate,
    #[serde(rename = "Quiz Me")]
    QuizMe,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::Translate, Task::QuizMe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Translate => "Translate",
            Task::QuizMe => "Quiz Me",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
