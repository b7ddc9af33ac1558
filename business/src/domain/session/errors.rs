#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.read_failed")]
    ReadFailed,
    #[error("session.write_failed")]
    WriteFailed,
    #[error("session.corrupt")]
    Corrupt,
}
