use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiationAccepted {
    pub success: bool,
    pub order_id: String,
    pub state: String,
    pub expire_at: i64,
    pub redirect_url: String,
}

#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
