use super::*;

impl QuizSession {
    /// Locks in `answer` for the current question. Only the first answer per
    /// question counts; later calls report `Locked` and change nothing.
    pub fn select_answer(&mut self, answer: &str) -> Result<AnswerOutcome, SessionError> {
        if self.phase != Phase::Playing {
            return Err(self.invalid("select_answer"));
        }
        if self.answered {
            log::debug!("answer already locked for question {}", self.current_index);
            return Ok(AnswerOutcome::Locked);
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return Err(self.invalid("select_answer"));
        };

        let correct = question.correct_answer == answer;
        self.selected_answer = Some(answer.to_owned());
        self.answered = true;
        if correct {
            self.score += 1;
        }
        log::debug!(
            "question {} answered ({}), score {}",
            self.current_index,
            if correct { "correct" } else { "incorrect" },
            self.score
        );

        Ok(if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        })
    }

    /// Moves past an answered question. On the last one the session finishes
    /// and the result goes into the history.
    pub fn next_question(&mut self) -> Result<Advance, SessionError> {
        if self.phase != Phase::Playing {
            return Err(self.invalid("next_question"));
        }
        if !self.answered {
            log::error!("next_question before answering question {}", self.current_index);
            return Err(SessionError::NotAnswered);
        }

        if self.is_last_question() {
            return Ok(Advance::Finished(self.finish()));
        }

        self.current_index += 1;
        self.selected_answer = None;
        self.answered = false;
        self.enter_question();
        log::debug!("advanced to question {}", self.current_index);
        Ok(Advance::Next(self.current_index))
    }
}
