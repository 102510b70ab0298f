//! Cross-view change propagation.
//!
//! A zero-payload, level-triggered broadcast: subscribers must re-read the
//! full store snapshot on any signal rather than apply a delta. A lagged
//! receiver therefore misses nothing observable; one pending signal is as
//! good as ten.

use tokio::sync::broadcast;

/// The change signal. Carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeSignal;

const CHANNEL_CAPACITY: usize = 16;

/// Broadcasts "progress data changed" to every subscribed view in the
/// running process.
///
/// Clones share the same channel. `notify` never fails; sending with no
/// subscribers is a no-op.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<ChangeSignal>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeSignal> {
        self.sender.subscribe()
    }

    pub fn notify(&self) {
        let _ = self.sender.send(ChangeSignal);
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
