// src/session/notice.rs
//! Transient acknowledgment line ("Copied!", "Downloaded!", ...) that removes
//! itself after a fixed delay.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Holds at most one message and the timer scheduled to remove it. Posting a
/// new message aborts the previous timer first, so a stale timer can never
/// clear a newer message.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Arc<Mutex<Option<String>>>,
    timer: Option<JoinHandle<()>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` and schedule its removal after `ttl`.
    pub fn post(&mut self, message: impl Into<String>, ttl: Duration) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        *self.lock() = Some(message.into());

        let slot = Arc::clone(&self.current);
        let sleep = tokio::time::sleep(ttl);
        self.timer = Some(tokio::spawn(async move {
            sleep.await;
            if let Ok(mut current) = slot.lock() {
                *current = None;
            }
        }));
    }

    /// Remove the message immediately and cancel the pending timer.
    pub fn clear(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        *self.lock() = None;
    }

    pub fn current(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.current.lock().expect("notice lock poisoned")
    }
}

impl Drop for NoticeBoard {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle() {
        // Let the spawned timer task observe the advanced clock.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn notice_removes_itself_after_ttl() {
        let mut board = NoticeBoard::new();
        board.post("Copied!", Duration::from_secs(2));
        assert_eq!(board.current().as_deref(), Some("Copied!"));

        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn reposting_cancels_the_previous_timer() {
        let mut board = NoticeBoard::new();
        board.post("first", Duration::from_secs(3));

        tokio::time::advance(Duration::from_secs(2)).await;
        board.post("second", Duration::from_secs(3));

        // Past the first timer's original deadline: the newer message must
        // survive because the old timer was aborted.
        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(board.current().as_deref(), Some("second"));

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_removes_the_notice_immediately() {
        let mut board = NoticeBoard::new();
        board.post("Downloaded!", Duration::from_secs(2));
        board.clear();
        assert_eq!(board.current(), None);
    }
}
