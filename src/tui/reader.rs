//! Learning module reader: section pages and the closing quiz.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::learning::content::SECTIONS_PER_MODULE;
use crate::learning::{AnswerFeedback, LearningModule, ModuleId, QuizState};
use crate::tui::Theme;

/// Reading state for one open module.
#[derive(Debug)]
pub struct ReaderState {
    module: LearningModule,
    /// 0-based index of the section on screen
    section: usize,
    /// Furthest section reached; backward jumps are free, forward is not
    reached: usize,
    quiz: Option<QuizState>,
}

impl ReaderState {
    /// Opens a module at its first section.
    #[must_use]
    pub fn new(id: ModuleId) -> Self {
        Self {
            module: LearningModule::load(id),
            section: 0,
            reached: 0,
            quiz: None,
        }
    }

    /// Which module is open.
    #[must_use]
    pub fn module_id(&self) -> ModuleId {
        self.module.id
    }

    /// Whether the quiz has started.
    #[must_use]
    pub fn in_quiz(&self) -> bool {
        self.quiz.is_some()
    }

    /// Moves back one section. Backward navigation is always allowed.
    pub fn previous_section(&mut self) {
        self.section = self.section.saturating_sub(1);
    }

    /// Moves forward one section, but never past the furthest reached.
    pub fn next_section(&mut self) {
        if self.section < self.reached {
            self.section += 1;
        }
    }

    /// Completes the section on screen: advances to the next one, or
    /// starts the quiz after the last section.
    pub fn complete_section(&mut self) {
        if self.section + 1 < SECTIONS_PER_MODULE {
            self.section += 1;
            self.reached = self.reached.max(self.section);
        } else if self.quiz.is_none() {
            self.quiz = Some(QuizState::new(self.module.quiz.to_vec()));
        }
    }

    /// Completion percent for the progress store: section position while
    /// reading, 100 once the quiz is done.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.quiz.as_ref().is_some_and(QuizState::is_finished) {
            return 100;
        }
        (((self.reached + 1) as f64 / SECTIONS_PER_MODULE as f64) * 100.0).round() as u8
    }

    /// Submits a quiz answer.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerFeedback> {
        self.quiz.as_mut()?.answer(choice)
    }

    /// Moves the quiz past its current reveal.
    pub fn advance_quiz(&mut self) {
        if let Some(quiz) = &mut self.quiz {
            quiz.advance();
        }
    }

    /// `(correct, total)` once the quiz has finished.
    #[must_use]
    pub fn quiz_summary(&self) -> Option<(usize, usize)> {
        let quiz = self.quiz.as_ref()?;
        quiz.is_finished()
            .then(|| (quiz.correct_count(), quiz.total_questions()))
    }

    fn quiz_ref(&self) -> Option<&QuizState> {
        self.quiz.as_ref()
    }
}

/// Render the module reader into `area`.
pub fn render(f: &mut Frame, area: Rect, reader: &ReaderState, theme: &Theme) {
    if let Some(quiz) = reader.quiz_ref() {
        render_quiz(f, area, quiz, theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Section body
            Constraint::Length(3), // Section dots + hint
        ])
        .split(area);

    let section = &reader.module.sections[reader.section];
    let body = Paragraph::new(section.body)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .title(format!(
                    " {} ({}/{}) ",
                    section.title,
                    reader.section + 1,
                    SECTIONS_PER_MODULE
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
    f.render_widget(body, chunks[0]);

    // Navigation dots, filled up to the furthest reached section
    let mut spans = vec![Span::raw(" ")];
    for index in 0..SECTIONS_PER_MODULE {
        let (glyph, color) = if index == reader.section {
            ("●", theme.accent)
        } else if index <= reader.reached {
            ("●", theme.primary)
        } else {
            ("○", theme.text_muted)
        };
        spans.push(Span::styled(glyph, Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        "   ←/→ browse · Enter continue · Esc back",
        Style::default().fg(theme.text_muted),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

fn render_quiz(f: &mut Frame, area: Rect, quiz: &QuizState, theme: &Theme) {
    let block = Block::default()
        .title(" Quiz ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    let Some(question) = quiz.current_question() else {
        // Finished: show the summary
        let correct = quiz.correct_count();
        let total = quiz.total_questions();
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Your score: {}/{}", correct, total),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if quiz.is_perfect() {
            lines.push(Line::from(Span::styled(
                "  Perfect! You answered every question correctly.",
                Style::default().fg(theme.success),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "  Press Enter to finish the module.",
            Style::default().fg(theme.text_muted),
        )));
        f.render_widget(Paragraph::new(lines).block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "  Question {}/{}",
                quiz.question_number(),
                quiz.total_questions()
            ),
            Style::default().fg(theme.text_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", question.prompt),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (index, choice) in question.choices.iter().enumerate() {
        let style = match quiz.revealed() {
            // While the reveal is showing, the correct choice turns green
            Some(AnswerFeedback::Correct) if index == question.answer_index => {
                Style::default().fg(theme.success)
            }
            Some(AnswerFeedback::Incorrect { correct_index }) if index == correct_index => {
                Style::default().fg(theme.success)
            }
            Some(_) => Style::default().fg(theme.text_muted),
            None => Style::default().fg(theme.text),
        };
        lines.push(Line::from(Span::styled(
            format!("  [{}] {}", index + 1, choice),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press 1-3 to answer.",
        Style::default().fg(theme.text_muted),
    )));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_navigation_stops_at_the_furthest_reached_section() {
        let mut reader = ReaderState::new(ModuleId::Introduction);
        reader.next_section();
        assert_eq!(reader.section, 0);

        reader.complete_section();
        reader.previous_section();
        reader.next_section();
        assert_eq!(reader.section, 1);
        reader.next_section();
        assert_eq!(reader.section, 1);
    }

    #[test]
    fn percent_tracks_sections_and_caps_at_quiz_completion() {
        let mut reader = ReaderState::new(ModuleId::Hazards);
        assert_eq!(reader.percent(), 25);

        reader.complete_section();
        assert_eq!(reader.percent(), 50);

        reader.complete_section();
        reader.complete_section();
        assert_eq!(reader.percent(), 100);
        assert!(!reader.in_quiz());

        // Completing the last section starts the quiz instead of advancing
        reader.complete_section();
        assert!(reader.in_quiz());
    }

    #[test]
    fn quiz_summary_appears_only_after_the_last_answer() {
        let mut reader = ReaderState::new(ModuleId::Assembly);
        for _ in 0..SECTIONS_PER_MODULE {
            reader.complete_section();
        }
        assert!(reader.quiz_summary().is_none());

        for _ in 0..3 {
            reader.answer(0);
            reader.advance_quiz();
        }
        let (_, total) = reader.quiz_summary().expect("quiz should be finished");
        assert_eq!(total, 3);
        assert_eq!(reader.percent(), 100);
    }
}
