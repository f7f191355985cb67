// SPDX-License-Identifier: MPL-2.0
use iced::widget::{button, column, row, text, Container, Stack};
use iced::{time, Element, Length, Subscription, Task};
use iced_toast::config::DefaultsPatch;
use iced_toast::notification::{Event, HideOptions, Notifier, ShowOptions};
use iced_toast::scheduler::TaskScheduler;
use iced_toast::store::FileStore;
use iced_toast::surface::{self, RetainedSurface, Surface};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const SPACING: f32 = 8.0;

#[derive(Debug, Clone)]
enum Message {
    ShowSaved,
    ShowBusy,
    ShowTappable,
    Hide,
    Rename,
    Enlarge,
    ResetDefaults,
    Toast(Event),
    Tick(Instant),
}

struct Demo {
    notifier: Notifier<FileStore, TaskScheduler, RetainedSurface>,
    last_tick: Option<Instant>,
    taps: Rc<Cell<u32>>,
}

impl Demo {
    fn new(store: FileStore) -> Self {
        Self {
            notifier: Notifier::new(store, TaskScheduler::new(), RetainedSurface::new()),
            last_tick: None,
            taps: Rc::new(Cell::new(0)),
        }
    }

    fn title(&self) -> String {
        "Iced Toast".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let window = self.notifier.surface().root();

        // Failures are logged by the notifier
        match message {
            Message::ShowSaved => {
                let _ = self
                    .notifier
                    .show(ShowOptions::new(window).label("Saved").duration(2.0));
            }
            Message::ShowBusy => {
                let _ = self
                    .notifier
                    .show(ShowOptions::new(window).label("Working").spinner(true));
            }
            Message::ShowTappable => {
                let taps = Rc::clone(&self.taps);
                let _ = self.notifier.show(
                    ShowOptions::new(window)
                        .label("Tap me")
                        .on_tap(move || taps.set(taps.get() + 1)),
                );
            }
            Message::Hide => {
                let _ = self.notifier.hide(HideOptions::new(window));
            }
            Message::Rename => {
                let _ = self.notifier.set_label("Almost done");
            }
            Message::Enlarge => {
                let _ = self
                    .notifier
                    .set_defaults(DefaultsPatch::new().size(150.0).label("Hello"));
            }
            Message::ResetDefaults => {
                let _ = self.notifier.reset_defaults();
            }
            Message::Toast(event) => self.notifier.update(event),
            Message::Tick(now) => {
                let elapsed = self
                    .last_tick
                    .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
                self.last_tick = Some(now);
                for event in self.notifier.surface_mut().advance(elapsed) {
                    self.notifier.update(event);
                }
                if !self.is_moving() {
                    self.last_tick = None;
                }
            }
        }

        self.notifier.scheduler_mut().take().map(Message::Toast)
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = column![
            row![
                button(text("Saved (2s)")).on_press(Message::ShowSaved),
                button(text("Busy")).on_press(Message::ShowBusy),
                button(text("Tappable")).on_press(Message::ShowTappable),
                button(text("Hide")).on_press(Message::Hide),
            ]
            .spacing(SPACING),
            row![
                button(text("Set label")).on_press(Message::Rename),
                button(text("Bigger defaults")).on_press(Message::Enlarge),
                button(text("Reset defaults")).on_press(Message::ResetDefaults),
            ]
            .spacing(SPACING),
            text(format!("Taps: {}", self.taps.get())),
        ]
        .spacing(SPACING * 1.5)
        .padding(SPACING * 2.0);

        let surface = self.notifier.surface();
        Stack::new()
            .push(Container::new(controls).width(Length::Fill).height(Length::Fill))
            .push(surface::view(
                surface,
                surface.root(),
                Message::Toast(Event::Tapped),
            ))
            .into()
    }

    /// Whether an animation is running or a spinner is on screen.
    fn is_moving(&self) -> bool {
        let surface = self.notifier.surface();
        let spinning = self.notifier.instance().is_some_and(|toast| {
            surface.contains(surface.root(), toast.root())
                && surface.node(toast.spinner()).is_some_and(|n| n.is_visible())
        });
        surface.has_animations() || spinning
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_moving() {
            time::every(FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open()?;

    iced::application(move || Demo::new(store.clone()), Demo::update, Demo::view)
        .title(Demo::title)
        .subscription(Demo::subscription)
        .run()?;
    Ok(())
}
