use exam_core::model::GradeReport;

/// One option row in an expanded result card, annotated for highlighting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultOptionVm {
    pub key: String,
    pub text: String,
    pub is_correct: bool,
    pub is_user_choice: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCardVm {
    pub question_id: u64,
    pub prompt: String,
    pub is_correct: bool,
    pub status_label: String,
    pub user_answer_label: String,
    pub explanation: String,
    pub options: Vec<ResultOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percent_label: String,
    pub cards: Vec<ResultCardVm>,
}

#[must_use]
pub fn map_report(report: &GradeReport) -> ResultsVm {
    let cards = report
        .results()
        .iter()
        .map(|result| {
            let options = result
                .question
                .options()
                .iter()
                .map(|option| ResultOptionVm {
                    key: option.key.clone(),
                    text: option.text.clone(),
                    is_correct: option.key == result.question.correct_key(),
                    is_user_choice: option.key == result.user_answer_key,
                })
                .collect();
            let status_label = if result.is_correct {
                "✓ Correct".to_string()
            } else {
                "✗ Incorrect".to_string()
            };
            let user_answer_label = if result.user_answer_key.is_empty() {
                "Not answered".to_string()
            } else {
                format!("Your answer: {}", result.user_answer_key)
            };
            ResultCardVm {
                question_id: result.question_id.value(),
                prompt: result.question.prompt().to_string(),
                is_correct: result.is_correct,
                status_label,
                user_answer_label,
                explanation: result.question.explanation().to_string(),
                options,
            }
        })
        .collect();

    ResultsVm {
        score_label: format!("{} / {}", report.score(), report.total_questions()),
        percent_label: format!("{}%", report.percentage()),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{
        Question, QuestionId, QuestionOption, QuestionResult, SessionId, SubjectId,
    };

    fn question(id: u64, correct: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            SubjectId::new(1),
            2020,
            format!("Q{id}?"),
            vec![
                QuestionOption {
                    key: "A".into(),
                    text: "alpha".into(),
                },
                QuestionOption {
                    key: "B".into(),
                    text: "beta".into(),
                },
            ],
            correct,
            "Because beta.",
            "easy",
            "en",
        )
        .unwrap()
    }

    fn report() -> GradeReport {
        GradeReport::from_parts(
            SessionId::new(4),
            1,
            2,
            vec![
                QuestionResult {
                    question_id: QuestionId::new(1),
                    question: question(1, "B"),
                    user_answer_key: "B".into(),
                    is_correct: true,
                },
                QuestionResult {
                    question_id: QuestionId::new(2),
                    question: question(2, "A"),
                    user_answer_key: String::new(),
                    is_correct: false,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn maps_score_and_percent() {
        let vm = map_report(&report());
        assert_eq!(vm.score_label, "1 / 2");
        assert_eq!(vm.percent_label, "50%");
        assert_eq!(vm.cards.len(), 2);
    }

    #[test]
    fn flags_correct_and_chosen_options() {
        let vm = map_report(&report());
        let first = &vm.cards[0];
        assert_eq!(first.status_label, "✓ Correct");
        assert!(first.options[1].is_correct);
        assert!(first.options[1].is_user_choice);

        let second = &vm.cards[1];
        assert_eq!(second.status_label, "✗ Incorrect");
        assert_eq!(second.user_answer_label, "Not answered");
        assert!(second.options[0].is_correct);
        assert!(!second.options.iter().any(|option| option.is_user_choice));
    }
}
