use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The cluster answered and refused the job (quota, RBAC, invalid spec, name collision).
    ///
    /// `message` is the cluster's own text, passed through unmodified.
    #[error("{message}")]
    Rejected {
        code: u16,
        reason: String,
        message: String,
    },

    /// The create call never produced an API answer.
    #[error("cluster request failed: {0}")]
    Transport(String),

    #[error("cluster credentials: {0}")]
    Credentials(String),
}

impl CoreError {
    /// True when the cluster refused the job because the name is already taken.
    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::Rejected { code: 409, .. })
            || matches!(self, CoreError::Rejected { reason, .. } if reason == "AlreadyExists")
    }
}

impl From<kube::Error> for CoreError {
    fn from(e: kube::Error) -> Self {
        match e {
            kube::Error::Api(resp) => CoreError::Rejected {
                code: resp.code,
                reason: resp.reason,
                message: resp.message,
            },
            other => CoreError::Transport(other.to_string()),
        }
    }
}
