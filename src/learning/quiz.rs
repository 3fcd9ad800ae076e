//! Quiz flow for the learning modules.
//!
//! One question at a time: answering reveals which choice was correct,
//! then the flow advances after a paced delay (driven by the caller's
//! scheduler). After the last question a score summary is shown.

/// A single multiple-choice question.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    /// The question text
    pub prompt: &'static str,
    /// The three presented choices
    pub choices: [&'static str; 3],
    /// Index into `choices` of the correct answer
    pub answer_index: usize,
}

/// Feedback for an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    /// The selected choice was correct
    Correct,
    /// The selected choice was wrong; carries the correct index for display
    Incorrect {
        /// Index of the choice that should have been picked
        correct_index: usize,
    },
}

/// Progress through one module's quiz.
#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Vec<QuizQuestion>,
    current: usize,
    correct: usize,
    /// Set while the answer reveal is on screen, before advancing
    revealed: Option<AnswerFeedback>,
    finished: bool,
}

impl QuizState {
    /// Starts a quiz over the given questions.
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let finished = questions.is_empty();
        Self {
            questions,
            current: 0,
            correct: 0,
            revealed: None,
            finished,
        }
    }

    /// The question currently on screen, unless the quiz is finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.finished {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// 1-based number of the question on screen, for display.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    /// Total number of questions.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Submits an answer for the current question.
    ///
    /// Ignored (returns `None`) while a reveal is already showing or the
    /// quiz is finished, so double-presses cannot double-count.
    pub fn answer(&mut self, choice_index: usize) -> Option<AnswerFeedback> {
        if self.finished || self.revealed.is_some() {
            return None;
        }
        let question = self.questions.get(self.current)?;
        if choice_index >= question.choices.len() {
            return None;
        }

        let feedback = if choice_index == question.answer_index {
            self.correct += 1;
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Incorrect {
                correct_index: question.answer_index,
            }
        };
        self.revealed = Some(feedback);
        Some(feedback)
    }

    /// The reveal currently on screen, if any.
    #[must_use]
    pub fn revealed(&self) -> Option<AnswerFeedback> {
        self.revealed
    }

    /// Moves past the reveal to the next question, or finishes the quiz
    /// after the last one. Called when the paced delay elapses.
    pub fn advance(&mut self) {
        if self.revealed.take().is_none() {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
    }

    /// Whether all questions have been answered.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Correctly answered questions so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Whether every question was answered correctly.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.finished && self.correct == self.questions.len() && !self.questions.is_empty()
    }
}
