use crate::service::AnswerService;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a question.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Pending,
}

/// Holds the form state and drives one request per submission.
pub struct QueryForm {
    query: String,
    answer: String,
    error: String,
    status: RequestStatus,
}

impl QueryForm {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            answer: String::new(),
            error: String::new(),
            status: RequestStatus::Idle,
        }
    }

    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub async fn submit(&mut self, service: &dyn AnswerService) {
        // Out-of-band call while a request is outstanding: no state
        // change, no request.
        if self.status == RequestStatus::Pending {
            return;
        }

        if self.query.trim().is_empty() {
            self.error = EMPTY_QUERY_MESSAGE.to_string();
            return;
        }

        self.status = RequestStatus::Pending;
        self.answer.clear();
        self.error.clear();

        match service.ask(&self.query).await {
            Ok(answer) => self.answer = answer,
            Err(err) => self.error = err.to_string(),
        }

        self.status = RequestStatus::Idle;
    }
}

impl Default for QueryForm {
    fn default() -> Self {
        Self::new()
    }
}
