use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by every write operation.
#[derive(Serialize, Debug)]
pub struct Success {
    pub success: bool,
}

impl Default for Success {
    fn default() -> Self {
        Self { success: true }
    }
}

/// Body returned for 403/404/500.
#[derive(Serialize, Debug)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}
