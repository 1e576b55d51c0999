use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::PromptError;

/// 按提示语逐条取得回答
pub trait AnswerSource {
    fn ask(&mut self, label: &str) -> Result<String, PromptError>;
}

/// 从标准输入读取，一行一个回答
#[derive(Debug, Default)]
pub struct StdinAnswers;

impl AnswerSource for StdinAnswers {
    fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        print!("{}", label);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// 预先写好的回答序列，用完即视为输入结束
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedAnswers {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        let answer = self.answers.pop_front().ok_or(PromptError::Closed)?;
        println!("{}{}", label, answer);
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_answers_run_out() {
        let mut answers = ScriptedAnswers::new(["a", ""]);
        assert_eq!(answers.ask("1: ").unwrap(), "a");
        assert_eq!(answers.ask("2: ").unwrap(), "");
        assert_eq!(answers.remaining(), 0);
        assert!(matches!(answers.ask("3: "), Err(PromptError::Closed)));
    }
}
