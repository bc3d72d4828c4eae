/// Turns a free-text question into a reply. Implementations are total:
/// every input yields a string.
pub trait Answerer: Send + Sync {
    fn answer(&self, query: &str) -> String;
}

/// Fire-and-forget delivery of an outbound notification.
///
/// `dispatch` must return without waiting for the delivery and must never
/// surface its outcome to the caller.
pub trait Notifier: Send + Sync {
    fn dispatch(&self, message: String);
}

impl<T: Answerer + ?Sized> Answerer for std::sync::Arc<T> {
    fn answer(&self, query: &str) -> String {
        (**self).answer(query)
    }
}
