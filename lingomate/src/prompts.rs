//! Prompt templates sent to the text-generation provider.
//!
//! A `Translate` task always uses the translation template. A `Quiz Me` task
//! picks the programming quiz when the text mentions a programming keyword
//! and the language-learning quiz otherwise.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{TargetLanguage, Task};

/// Substrings that mark a quiz topic as programming related.
/// Matching is case-insensitive containment, not whole-word.
pub const PROGRAMMING_KEYWORDS: [&str; 9] = [
    "python",
    "typescript",
    "html",
    "css",
    "javascript",
    "java",
    "c++",
    "programming",
    "coding",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    Translation,
    ProgrammingQuiz,
    LanguageQuiz,
}

impl PromptTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptTemplate::Translation => "translation",
            PromptTemplate::ProgrammingQuiz => "programming_quiz",
            PromptTemplate::LanguageQuiz => "language_quiz",
        }
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered prompt and the template it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub template: PromptTemplate,
    pub text: String,
}

pub fn is_programming_topic(text: &str) -> bool {
    let lowered = text.to_lowercase();
    PROGRAMMING_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

pub fn select_template(task: Task, text: &str) -> PromptTemplate {
    match task {
        Task::Translate => PromptTemplate::Translation,
        Task::QuizMe if is_programming_topic(text) => PromptTemplate::ProgrammingQuiz,
        Task::QuizMe => PromptTemplate::LanguageQuiz,
    }
}

pub fn build_prompt(task: Task, target_lang: TargetLanguage, text: &str) -> Prompt {
    let template = select_template(task, text);
    let rendered = match template {
        PromptTemplate::Translation => translation_prompt(target_lang, text),
        PromptTemplate::ProgrammingQuiz => programming_quiz_prompt(text),
        PromptTemplate::LanguageQuiz => language_quiz_prompt(target_lang, text),
    };

    Prompt {
        template,
        text: rendered,
    }
}

fn translation_prompt(target_lang: TargetLanguage, text: &str) -> String {
    format!("Translate this to {target_lang}:\n{text}")
}

fn programming_quiz_prompt(topic: &str) -> String {
    format!(
        r#"
You are a programming instructor. Create an official beginner-level quiz on the topic: "{topic}"

Requirements:
- 10 multiple choice questions (MCQs)
- Each question should have 4 options (A, B, C, D)
- Clearly mark the correct answer for each question

Format:
Q1. ...
A. ...
B. ...
C. ...
D. ...
Answer: ...
"#
    )
}

fn language_quiz_prompt(target_lang: TargetLanguage, sentence: &str) -> String {
    format!(
        r#"
You are a language tutor. Create a language quiz based on the sentence: "{sentence}" in {target_lang}.

Instructions:
- Include 5 MCQs and 2 fill-in-the-blank questions.
- Format it like this:
Q1. ...
A. ...
B. ...
C. ...
Answer: ...
- Keep questions beginner friendly and relevant.
"#
    )
}
