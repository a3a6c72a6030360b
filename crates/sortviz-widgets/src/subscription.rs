//! Bridge from the run controller's event channel into iced
//!
//! The controller runs on its own thread and reports through a plain
//! `std::sync::mpsc` channel. [`channel_subscription`] turns the receiving end
//! into a `Subscription` the application can `.map()` into its messages.

use std::any::TypeId;
use std::hash::Hash;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use iced::advanced::subscription::{self, EventStream, Hasher, Recipe};
use iced::futures::stream::BoxStream;
use iced::Subscription;

/// How long the stream sleeps when the channel is empty
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

struct ChannelRecipe<T> {
    /// Address of the shared receiver, used as subscription identity
    id: usize,
    receiver: Arc<Mutex<Receiver<T>>>,
}

impl<T: Send + 'static> Recipe for ChannelRecipe<T> {
    type Output = T;

    fn hash(&self, state: &mut Hasher) {
        TypeId::of::<Self>().hash(state);
        self.id.hash(state);
    }

    fn stream(self: Box<Self>, _input: EventStream) -> BoxStream<'static, Self::Output> {
        Box::pin(iced::futures::stream::unfold(
            self.receiver,
            |rx| async move {
                loop {
                    match poll(&rx) {
                        Poll::Ready(item) => return Some((item, rx)),
                        // Sender dropped: the controller thread has exited
                        Poll::Closed => {
                            log::debug!("event channel closed, ending subscription");
                            return None;
                        }
                        Poll::Empty => tokio::time::sleep(POLL_INTERVAL).await,
                    }
                }
            },
        ))
    }
}

enum Poll<T> {
    Ready(T),
    Empty,
    Closed,
}

fn poll<T>(receiver: &Mutex<Receiver<T>>) -> Poll<T> {
    let Ok(rx) = receiver.lock() else {
        return Poll::Closed;
    };
    match rx.try_recv() {
        Ok(item) => Poll::Ready(item),
        Err(TryRecvError::Empty) => Poll::Empty,
        Err(TryRecvError::Disconnected) => Poll::Closed,
    }
}

/// Subscription yielding every item sent on `receiver`
///
/// Calling this again with the same `Arc` yields the same subscription, so it
/// is safe to build from `App::subscription` on every update.
pub fn channel_subscription<T>(receiver: Arc<Mutex<Receiver<T>>>) -> Subscription<T>
where
    T: Send + 'static,
{
    let id = Arc::as_ptr(&receiver) as usize;
    subscription::from_recipe(ChannelRecipe { id, receiver })
}
