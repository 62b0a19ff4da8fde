use super::transaction_context::{KeyValue, StateQueryIterator};

/// Owns a [`StateQueryIterator`] for the duration of one operation.
///
/// The cursor is closed on drop, so every exit path (including `?` and panics)
/// releases it. Call [`ScopedIterator::close`] to observe the close result instead.
pub struct ScopedIterator {
    inner: Option<Box<dyn StateQueryIterator>>,
}

impl ScopedIterator {
    pub fn new(inner: Box<dyn StateQueryIterator>) -> Self {
        Self { inner: Some(inner) }
    }

    pub async fn next(&mut self) -> Result<Option<KeyValue>, Box<dyn std::error::Error + Send + Sync>> {
        match self.inner.as_mut() {
            Some(iterator) => iterator.next().await,
            None => Ok(None),
        }
    }

    pub fn close(mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match self.inner.take() {
            Some(mut iterator) => iterator.close(),
            None => Ok(()),
        }
    }
}

impl Drop for ScopedIterator {
    fn drop(&mut self) {
        if let Some(mut iterator) = self.inner.take() {
            // Nothing can be reported from drop
            let _ = iterator.close();
        }
    }
}
