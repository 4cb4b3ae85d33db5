use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateSessionForm {
    pub language: String,
    pub topic: Option<String>,
    pub user_id: Option<String>,
}
