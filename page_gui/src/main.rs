//! # Page Viewer Application
//!
//! Graphical viewer for the probability & statistics page. Built with the
//! Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! The page itself is inert: the document is built once at startup and the
//! only event is a window resize, which drives the narrow-viewport cutoff
//! for the secondary logo.

mod assets;
mod ui;

use iced::widget::scrollable;
use iced::{Element, Length, Subscription, Theme};

use page_core::clock::SystemClock;
use page_core::document::Document;

/// Window width below which the secondary logo is hidden
pub const NARROW_VIEWPORT_PX: f32 = 640.0;

/// Default window width assumed until the first resize event arrives
const DEFAULT_WIDTH_PX: f32 = 1280.0;

/// Application state: the built document plus the current window width.
pub struct App {
    document: Document,
    window_width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Window was resized; the width drives the narrow-viewport cutoff
    WindowResized(f32),
}

impl App {
    fn new() -> Self {
        App {
            document: page_core::content::document(&SystemClock),
            window_width: DEFAULT_WIDTH_PX,
        }
    }

    fn title(&self) -> String {
        self.document.meta.title.clone()
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::WindowResized(width) => self.window_width = width,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let page = iced::widget::column![
            ui::header::view(&self.document.header, self.window_width),
            ui::sections::view(&self.document),
            ui::footer::view(&self.document.footer),
        ]
        .width(Length::Fill);

        scrollable(page).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size.width))
    }

    fn theme(&self) -> Theme {
        ui::shared::palette::theme()
    }
}

fn main() -> iced::Result {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .theme(App::theme)
        .run()
}
