use dioxus::prelude::*;

use services::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// User-facing message from the API boundary.
    Api(String),
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_api(err: &ApiError) -> Self {
        Self::Api(err.user_message())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ViewError::Api(message) => message,
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
