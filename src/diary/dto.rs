use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    pub mood: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DiaryQuery {
    pub date: Option<Date>,
}

/// A finished entry written elsewhere. `date` defaults to today.
#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub date: Option<Date>,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub content: String,
}
