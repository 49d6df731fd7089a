use failure::Fail;

#[derive(Debug, Fail)]
pub enum ControllerError {
    #[fail(display = "Remote call rejected: {}", message)]
    RemoteRejected { message: String },
    #[fail(display = "Unusable remote response: {}", message)]
    InvalidResponse { message: String },
}

impl ControllerError {
    /// The text fit for a user-facing notification. Remote rejections surface
    /// the service-supplied message verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ControllerError::RemoteRejected { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
