//! Viewport width notifications.
//!
//! The host pushes every resize into a [`ViewportHub`]. Listeners hold a
//! [`ViewportSubscription`]; dropping it deregisters the listener, so mount /
//! unmount cycles never leak.

use tokio::sync::watch;

#[derive(Debug)]
pub struct ViewportHub {
    tx: watch::Sender<u32>,
}

impl ViewportHub {
    pub fn new(initial_width_px: u32) -> Self {
        let (tx, _rx) = watch::channel(initial_width_px);
        Self { tx }
    }

    /// Records a resize. Listeners see only the latest width.
    pub fn resize(&self, width_px: u32) {
        self.tx.send_replace(width_px);
    }

    pub fn width(&self) -> u32 {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> ViewportSubscription {
        ViewportSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[derive(Debug)]
pub struct ViewportSubscription {
    rx: watch::Receiver<u32>,
}

impl ViewportSubscription {
    /// Width at subscription time or at the last poll.
    pub fn current(&mut self) -> u32 {
        *self.rx.borrow_and_update()
    }

    /// Latest width if it changed since the last poll.
    pub fn poll_change(&mut self) -> Option<u32> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }

    /// Waits for the next resize. `None` once the hub is gone.
    pub async fn changed(&mut self) -> Option<u32> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
