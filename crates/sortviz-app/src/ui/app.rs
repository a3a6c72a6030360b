//! Main iced application for sortviz
//!
//! Layout, top to bottom:
//! - bar chart of the current permutation
//! - "Algorithm / Comparisons / Swaps" labels
//! - one button per algorithm, then Stop and Reset

use iced::widget::{button, column, container, row, text, Row};
use iced::{Center, Element, Fill, Subscription, Task, Theme};
use sortviz_core::config::DisplayConfig;
use sortviz_core::{Algorithm, RunState, Snapshot};
use sortviz_widgets::{bar_chart, channel_subscription};

use crate::worker::{WorkerEvent, WorkerHandle};

/// Everything the window shows, rebuilt from worker events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub snapshot: Snapshot,
    pub algorithm: Option<Algorithm>,
    pub state: RunState,
}

impl ViewState {
    pub fn apply(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Frame(snapshot) => self.snapshot = snapshot,
            WorkerEvent::Algorithm(algorithm) => self.algorithm = algorithm,
            WorkerEvent::State(state) => self.state = state,
        }
    }

    pub fn algorithm_label(&self) -> String {
        format!(
            "Algorithm: {}",
            self.algorithm.map(|a| a.name()).unwrap_or("None")
        )
    }

    pub fn comparisons_label(&self) -> String {
        format!("Comparisons: {}", self.snapshot.counters.comparisons)
    }

    pub fn swaps_label(&self) -> String {
        format!("Swaps: {}", self.snapshot.counters.swaps)
    }
}

/// Application state
pub struct SortvizApp {
    /// Run controller thread (None if it failed to start)
    worker: Option<WorkerHandle>,
    screen: ViewState,
    display: DisplayConfig,
}

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    Start(Algorithm),
    Stop,
    Reset,
    Worker(WorkerEvent),
}

impl SortvizApp {
    pub fn new(worker: Option<WorkerHandle>, display: DisplayConfig) -> Self {
        Self {
            worker,
            screen: ViewState::default(),
            display,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Start(algorithm) => {
                if let Some(ref worker) = self.worker {
                    worker.request_start(algorithm);
                }
            }
            Message::Stop => {
                if let Some(ref worker) = self.worker {
                    if worker.request_stop() {
                        log::info!("Stop requested");
                    }
                }
            }
            Message::Reset => {
                if let Some(ref worker) = self.worker {
                    worker.request_reset();
                }
            }
            Message::Worker(event) => self.screen.apply(event),
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.worker {
            Some(ref worker) => channel_subscription(worker.events()).map(Message::Worker),
            None => Subscription::none(),
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let chart = bar_chart(&self.screen.snapshot, self.display.width, self.display.height);

        let labels = row![
            text(self.screen.algorithm_label()).size(16),
            text(self.screen.comparisons_label()).size(16),
            text(self.screen.swaps_label()).size(16),
        ]
        .spacing(30);

        let running = self.screen.state.is_running()
            || self.worker.as_ref().is_some_and(|w| w.is_running());
        let mut controls = Row::new().spacing(8).align_y(Center);
        for algorithm in Algorithm::ALL {
            controls = controls.push(
                button(text(algorithm.name()))
                    .on_press_maybe((!running).then_some(Message::Start(algorithm))),
            );
        }
        controls = controls
            .push(button(text("Stop")).on_press(Message::Stop))
            .push(button(text("Reset")).on_press(Message::Reset));

        let mut content = column![chart, labels, controls].spacing(12);
        if self.worker.is_none() {
            content = content.push(text("Run controller unavailable, see log").size(12));
        }

        container(content).padding(10).width(Fill).height(Fill).into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::{Counters, Highlight};

    #[test]
    fn test_labels_start_empty() {
        let view = ViewState::default();
        assert_eq!(view.algorithm_label(), "Algorithm: None");
        assert_eq!(view.comparisons_label(), "Comparisons: 0");
        assert_eq!(view.swaps_label(), "Swaps: 0");
    }

    #[test]
    fn test_events_update_labels() {
        let mut view = ViewState::default();
        view.apply(WorkerEvent::Algorithm(Some(Algorithm::Merge)));
        view.apply(WorkerEvent::State(RunState::Running(Algorithm::Merge)));
        view.apply(WorkerEvent::Frame(Snapshot {
            values: vec![2, 1, 3],
            highlight: Highlight::indices(&[0, 1]),
            counters: Counters {
                comparisons: 4,
                swaps: 2,
            },
        }));

        assert_eq!(view.algorithm_label(), "Algorithm: Merge Sort");
        assert_eq!(view.comparisons_label(), "Comparisons: 4");
        assert_eq!(view.swaps_label(), "Swaps: 2");
        assert!(view.state.is_running());

        view.apply(WorkerEvent::Algorithm(None));
        view.apply(WorkerEvent::State(RunState::Stopped));
        assert_eq!(view.algorithm_label(), "Algorithm: None");
        assert!(!view.state.is_running());
        // Counters stay until the next frame
        assert_eq!(view.comparisons_label(), "Comparisons: 4");
    }

    #[test]
    fn test_buttons_without_worker_are_harmless() {
        let mut app = SortvizApp::new(None, DisplayConfig::default());
        let _ = app.update(Message::Start(Algorithm::Quick));
        let _ = app.update(Message::Stop);
        let _ = app.update(Message::Reset);
        assert_eq!(app.screen.state, RunState::Idle);
    }
}
