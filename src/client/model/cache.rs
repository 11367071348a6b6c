use crate::client::model::error::ApiError;

#[derive(Clone, Default)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Cache::NotFetched)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(err) => Some(err),
            _ => None,
        }
    }
}
