//! Deterministic fakes for the prompt and block-number seams.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::cache::BlockNumberSource;
use crate::error::{GenError, GenResult};
use crate::pool::Chain;
use crate::prompt::{Prompter, Validator};

#[derive(Debug, Clone)]
enum Step {
    Answer(String),
    Select(Vec<usize>),
    Confirm(bool),
}

/// Prompter that replays a fixed script of answers.
///
/// Answers rejected by a validator are counted and skipped, the way the
/// terminal re-asks. Running out of script is an error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    steps: VecDeque<Step>,
    messages: Vec<String>,
    rejected: usize,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, value: &str) -> Self {
        self.steps.push_back(Step::Answer(value.to_string()));
        self
    }

    pub fn select(mut self, indices: Vec<usize>) -> Self {
        self.steps.push_back(Step::Select(indices));
        self
    }

    pub fn confirm(mut self, yes: bool) -> Self {
        self.steps.push_back(Step::Confirm(yes));
        self
    }

    /// Messages of every question asked so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// How many answers were rejected by validation.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Script steps not consumed yet.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    fn next(&mut self, message: &str) -> GenResult<Step> {
        self.steps
            .pop_front()
            .ok_or_else(|| GenError::prompt(format!("script exhausted at '{}'", message)))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, validate: Validator<'_>) -> GenResult<String> {
        self.messages.push(message.to_string());
        loop {
            match self.next(message)? {
                Step::Answer(value) => match validate(&value) {
                    Ok(()) => return Ok(value),
                    Err(_) => self.rejected += 1,
                },
                other => {
                    return Err(GenError::prompt(format!("expected answer for '{}', got {:?}", message, other)))
                }
            }
        }
    }

    fn multi_select(&mut self, message: &str, choices: &[String], required: bool) -> GenResult<Vec<usize>> {
        self.messages.push(message.to_string());
        loop {
            match self.next(message)? {
                Step::Select(mut indices) => {
                    if required && indices.is_empty() {
                        self.rejected += 1;
                        continue;
                    }
                    if let Some(ix) = indices.iter().find(|ix| **ix >= choices.len()) {
                        return Err(GenError::prompt(format!("choice {} out of range for '{}'", ix, message)));
                    }
                    indices.sort_unstable();
                    indices.dedup();
                    return Ok(indices);
                }
                other => {
                    return Err(GenError::prompt(format!("expected selection for '{}', got {:?}", message, other)))
                }
            }
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> GenResult<bool> {
        self.messages.push(message.to_string());
        match self.next(message)? {
            Step::Confirm(yes) => Ok(yes),
            other => Err(GenError::prompt(format!("expected confirmation for '{}', got {:?}", message, other))),
        }
    }
}

/// Block number source that always answers the same block and records
/// which chains were asked.
#[derive(Debug, Default)]
pub struct FixedBlockNumbers {
    block_number: u64,
    calls: Mutex<Vec<Chain>>,
}

impl FixedBlockNumbers {
    pub fn new(block_number: u64) -> Self {
        Self {
            block_number,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Chain> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BlockNumberSource for FixedBlockNumbers {
    async fn block_number(&self, chain: Chain) -> GenResult<u64> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(chain);
        }
        Ok(self.block_number)
    }
}
