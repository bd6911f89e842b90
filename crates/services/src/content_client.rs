//! REST client for the remote content and grading API.
//!
//! Wire payloads are camelCase JSON; they are decoded into private DTOs here
//! and validated into domain types at the boundary, so the rest of the app
//! only ever sees well-formed records.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use exam_core::model::{
    Answer, Exam, ExamId, GradeReport, HistoryEntry, Note, NoteId, Question, QuestionId,
    QuestionOption, QuestionResult, SessionId, Subject, SubjectId,
};

use crate::auth::TokenProvider;
use crate::error::ApiError;

pub struct ContentClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ContentClient {
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            tokens,
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures.
    pub async fn list_exams(&self) -> Result<Vec<Exam>, ApiError> {
        let dtos: Vec<ExamDto> = self.get_json("/exams").await?;
        Ok(dtos.into_iter().map(ExamDto::into_domain).collect())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures.
    pub async fn list_subjects(&self, exam_id: ExamId) -> Result<Vec<Subject>, ApiError> {
        let dtos: Vec<SubjectDto> = self.get_json(&format!("/exams/{exam_id}/subjects")).await?;
        Ok(dtos.into_iter().map(SubjectDto::into_domain).collect())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures, or when a
    /// question in the payload is malformed.
    pub async fn list_questions(&self, subject_id: SubjectId) -> Result<Vec<Question>, ApiError> {
        let dtos: Vec<QuestionDto> = self
            .get_json(&format!("/subjects/{subject_id}/questions"))
            .await?;
        dtos.into_iter().map(QuestionDto::into_domain).collect()
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures.
    pub async fn get_question(&self, question_id: QuestionId) -> Result<Question, ApiError> {
        let dto: QuestionDto = self.get_json(&format!("/questions/{question_id}")).await?;
        dto.into_domain()
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures.
    pub async fn list_notes(&self, subject_id: SubjectId) -> Result<Vec<Note>, ApiError> {
        let dtos: Vec<NoteDto> = self
            .get_json(&format!("/notes/subject/{subject_id}"))
            .await?;
        Ok(dtos.into_iter().map(NoteDto::into_domain).collect())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures.
    pub async fn get_note(&self, note_id: NoteId) -> Result<Note, ApiError> {
        let dto: NoteDto = self.get_json(&format!("/notes/{note_id}")).await?;
        Ok(dto.into_domain())
    }

    /// Ask the server to open a quiz session over `question_count` questions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures, or when a
    /// question in the payload is malformed.
    pub async fn start_quiz(
        &self,
        subject_id: SubjectId,
        question_count: u32,
    ) -> Result<(SessionId, Vec<Question>), ApiError> {
        let request = self
            .client
            .post(format!("{}/quizzes/start", self.base_url))
            .json(&QuizStartRequest {
                subject_id,
                number_of_questions: question_count,
            });
        let response: QuizStartResponse = self.send(request).await?;
        let questions = response
            .questions
            .into_iter()
            .map(QuestionDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((response.session_id, questions))
    }

    /// Submit the accumulated answers for grading.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures, or when
    /// the report payload is internally inconsistent.
    pub async fn grade_quiz(
        &self,
        session_id: SessionId,
        answers: &[Answer],
    ) -> Result<GradeReport, ApiError> {
        let payload = QuizGradeRequest {
            session_id,
            answers: answers.iter().map(AnswerDto::from_domain).collect(),
        };
        let request = self
            .client
            .post(format!("{}/quizzes/grade", self.base_url))
            .json(&payload);
        let response: QuizGradeResponse = self.send(request).await?;

        let results = response
            .results
            .into_iter()
            .map(QuestionResultDto::into_domain)
            .collect::<Result<Vec<_>, ApiError>>()?;
        let report = GradeReport::from_parts(
            response.session_id,
            response.score,
            response.total_questions,
            results,
        )?;
        Ok(report)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status or decode failures.
    pub async fn quiz_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let dtos: Vec<HistoryDto> = self.get_json("/quizzes/history").await?;
        Ok(dtos.into_iter().map(HistoryDto::into_domain).collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.client.get(format!("{}{path}", self.base_url));
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match self.tokens.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        tracing::warn!(%status, "request rejected");
        return Err(match response.json::<ErrorBody>().await {
            Ok(body) => ApiError::Server {
                status,
                message: body.message,
            },
            Err(_) => ApiError::Status(status),
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Parse(err.to_string()))
}

//
// ─── WIRE DTOS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExamDto {
    id: ExamId,
    name: String,
    description: String,
    country_code: Option<String>,
}

impl ExamDto {
    fn into_domain(self) -> Exam {
        Exam {
            id: self.id,
            name: self.name,
            description: self.description,
            country_code: self.country_code,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubjectDto {
    id: SubjectId,
    exam_id: ExamId,
    name: String,
    description: String,
}

impl SubjectDto {
    fn into_domain(self) -> Subject {
        Subject {
            id: self.id,
            exam_id: self.exam_id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionDto {
    key: String,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionDto {
    id: QuestionId,
    subject_id: SubjectId,
    year: u16,
    question_text: String,
    options: Vec<OptionDto>,
    correct_option_key: String,
    explanation_text: String,
    difficulty_level: String,
    language: String,
}

impl QuestionDto {
    fn into_domain(self) -> Result<Question, ApiError> {
        let options = self
            .options
            .into_iter()
            .map(|option| QuestionOption {
                key: option.key,
                text: option.text,
            })
            .collect();
        Ok(Question::new(
            self.id,
            self.subject_id,
            self.year,
            self.question_text,
            options,
            self.correct_option_key,
            self.explanation_text,
            self.difficulty_level,
            self.language,
        )?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteDto {
    id: NoteId,
    subject_id: SubjectId,
    title: String,
    content: String,
    language: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteDto {
    fn into_domain(self) -> Note {
        Note {
            id: self.id,
            subject_id: self.subject_id,
            title: self.title,
            content: self.content,
            language: self.language,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizStartRequest {
    subject_id: SubjectId,
    number_of_questions: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizStartResponse {
    session_id: SessionId,
    questions: Vec<QuestionDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerDto {
    question_id: QuestionId,
    user_answer_key: String,
}

impl AnswerDto {
    fn from_domain(answer: &Answer) -> Self {
        Self {
            question_id: answer.question_id,
            user_answer_key: answer.selected_key.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizGradeRequest {
    session_id: SessionId,
    answers: Vec<AnswerDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionResultDto {
    question_id: QuestionId,
    question: QuestionDto,
    user_answer_key: String,
    is_correct: bool,
}

impl QuestionResultDto {
    fn into_domain(self) -> Result<QuestionResult, ApiError> {
        Ok(QuestionResult {
            question_id: self.question_id,
            question: self.question.into_domain()?,
            user_answer_key: self.user_answer_key,
            is_correct: self.is_correct,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizGradeResponse {
    session_id: SessionId,
    score: u32,
    total_questions: u32,
    results: Vec<QuestionResultDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryDto {
    id: SessionId,
    subject_id: SubjectId,
    subject: SubjectDto,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    score: u32,
    total_questions: u32,
}

impl HistoryDto {
    fn into_domain(self) -> HistoryEntry {
        HistoryEntry {
            session_id: self.id,
            subject_id: self.subject_id,
            subject_name: self.subject.name,
            started_at: self.start_time,
            ended_at: self.end_time,
            score: self.score,
            total_questions: self.total_questions,
        }
    }
}
