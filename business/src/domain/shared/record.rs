/// A row of an admin collection, matched by its backend identity.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}
