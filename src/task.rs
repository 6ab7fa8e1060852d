use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct TaskResponse {
  #[serde(rename = "taskID")]
  pub(crate) task_id: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskStatus {
  pub(crate) status: String,
}
