use iced::widget::{button, canvas, column, container, row, scrollable, stack, text, text_input, Column};
use iced::{event, keyboard, mouse, window, Event, Point, Subscription};
use iced::{Alignment, Element, Length, Padding, Task, Theme};
use std::time::{Duration, Instant};

mod slides;
mod state;
mod ui;

use state::carousel::CarouselState;
use state::data;
use state::motion::{CursorFollower, CursorState, Entrance};
use state::search::SearchState;
use state::settings::Settings;
use state::toast::ToastState;
use ui::carousel::SlideImage;
use ui::icons::{Magnifier, PawIcon, PawOverlay, ICON_SIZE};
use ui::theme::{faded, Palette};

/// Frames longer than this are treated as this long (e.g. after the window was hidden)
const MAX_FRAME: Duration = Duration::from_millis(100);

/// Main page state
struct CatsPage {
    settings: Settings,
    /// Contents of the breed search field
    search: SearchState,
    carousel: CarouselState,
    /// One entry per carousel image, same order as `data::CAT_IMAGES`
    slides: Vec<SlideImage>,
    toasts: ToastState,
    cursor: CursorState,
    paw: CursorFollower,
    entrance: Entrance,
    /// Timestamp of the previous animation frame while animating
    last_frame: Option<Instant>,
}

/// Page messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search field contents changed
    SearchChanged(String),
    CarouselPrevious,
    CarouselNext,
    CarouselGoTo(usize),
    /// Background download of a carousel image finished
    SlideLoaded(usize, Result<slides::DecodedSlide, slides::SlideError>),
    /// User clicked the fact button
    FactRequested,
    /// Close button on the toast
    DismissToast(u64),
    /// Auto-dismiss timer for the toast with this id fired
    ToastExpired(u64),
    CursorMoved(Point),
    Frame(Instant),
}

impl CatsPage {
    /// Create the page and start downloading the carousel images
    fn new() -> (Self, Task<Message>) {
        let mut page = Self::with_settings(Settings::load());

        tracing::info!(
            breeds = data::BREEDS.len(),
            slides = data::CAT_IMAGES.len(),
            "🐱 Page initialized"
        );

        // One client for all slides so they share its connection pool
        let client = match slides::http_client() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("⚠️  No HTTP client, slides stay empty: {e}");
                page.slides.fill(SlideImage::Failed(e.to_string()));
                return (page, Task::none());
            }
        };

        let downloads = data::CAT_IMAGES.iter().enumerate().map(|(index, &url)| {
            Task::perform(slides::fetch_slide(client.clone(), url), move |result| {
                Message::SlideLoaded(index, result)
            })
        });

        (page, Task::batch(downloads))
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            search: SearchState::default(),
            carousel: CarouselState::new(data::CAT_IMAGES.len(), settings.carousel_loop),
            slides: vec![SlideImage::Loading; data::CAT_IMAGES.len()],
            toasts: ToastState::default(),
            cursor: CursorState::default(),
            paw: CursorFollower::new(settings.spring),
            entrance: Entrance::default(),
            last_frame: None,
            settings,
        }
    }

    /// Handle page messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(value) => {
                self.search.set_query(value);
                Task::none()
            }
            Message::CarouselPrevious => {
                self.carousel.previous();
                Task::none()
            }
            Message::CarouselNext => {
                self.carousel.next();
                Task::none()
            }
            Message::CarouselGoTo(index) => {
                self.carousel.go_to(index);
                Task::none()
            }
            Message::SlideLoaded(index, result) => {
                let Some(slide) = self.slides.get_mut(index) else {
                    return Task::none();
                };
                *slide = match result {
                    Ok(decoded) => {
                        tracing::info!(index, width = decoded.width, height = decoded.height, "📸 Slide ready");
                        SlideImage::Loaded(iced::widget::image::Handle::from_rgba(
                            decoded.width,
                            decoded.height,
                            decoded.pixels,
                        ))
                    }
                    Err(e) => {
                        tracing::warn!(index, url = data::CAT_IMAGES[index], "⚠️  Slide failed: {e}");
                        SlideImage::Failed(e.to_string())
                    }
                };
                Task::none()
            }
            Message::FactRequested => {
                let id = self.toasts.show(data::FACT_TITLE, data::FACT_DESCRIPTION);
                let duration = Duration::from_millis(self.settings.toast_duration_ms);

                // Sleep is created inside the future so it binds to the runtime's timer
                Task::perform(
                    async move { tokio::time::sleep(duration).await },
                    move |_| Message::ToastExpired(id),
                )
            }
            Message::DismissToast(id) | Message::ToastExpired(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            Message::CursorMoved(position) => {
                self.cursor = CursorState {
                    x: position.x,
                    y: position.y,
                };
                self.paw.follow(self.cursor);
                Task::none()
            }
            Message::Frame(now) => {
                let dt = self
                    .last_frame
                    .map(|last| now.saturating_duration_since(last).min(MAX_FRAME))
                    .unwrap_or(Duration::ZERO);

                self.entrance.advance(dt);
                self.paw.tick(dt.as_secs_f32());
                self.last_frame = if self.is_animating() { Some(now) } else { None };
                Task::none()
            }
        }
    }

    /// Whether anything on screen is still moving
    fn is_animating(&self) -> bool {
        !self.entrance.is_done() || (self.settings.cursor_follow && !self.paw.is_at_rest())
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let palette = Palette::for_choice(self.settings.theme);
        let opacity = self.entrance.progress();

        let title = row![
            canvas(PawIcon { color: palette.heading })
                .width(Length::Fixed(48.0))
                .height(Length::Fixed(48.0)),
            text(data::PAGE_TITLE)
                .size(56)
                .color(faded(palette.heading, opacity)),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let intro = text(data::INTRO)
            .size(20)
            .color(faded(palette.body, opacity))
            .width(Length::Fill)
            .center();

        let chart_section = column![
            section_heading("Cat Living Environments", palette),
            ui::pie_chart::view(&data::CAT_STATS, &data::SLICE_COLORS, palette.body),
        ]
        .spacing(16)
        .width(Length::FillPortion(1));

        let trivia = data::TRIVIA.iter().fold(Column::new().spacing(8), |list, fact| {
            list.push(text(format!("•  {fact}")).size(18).color(palette.body))
        });
        let trivia_section = column![
            section_heading("Did You Know?", palette),
            trivia,
            button(text("Tell me a cat fact!").size(16))
                .on_press(Message::FactRequested)
                .padding([8, 16]),
        ]
        .spacing(16)
        .width(Length::FillPortion(1));

        let search = row![
            canvas(Magnifier { color: palette.muted })
                .width(Length::Fixed(ICON_SIZE.width))
                .height(Length::Fixed(ICON_SIZE.height)),
            text_input("Search cat breeds...", self.search.query())
                .on_input(Message::SearchChanged)
                .padding(10)
                .size(16),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let visible = self.search.visible(&data::BREEDS);

        let content = column![
            container(title).center_x(Length::Fill),
            ui::carousel::view(&self.carousel, &self.slides, palette),
            intro,
            row![chart_section, trivia_section].spacing(32),
            section_heading("Popular Cat Breeds", palette),
            search,
            ui::breed_card::list(&visible, palette),
        ]
        .spacing(32)
        .max_width(1152.0);

        let page = container(
            scrollable(
                container(content)
                    .center_x(Length::Fill)
                    .padding(Padding::new(32.0).top(32.0 + self.entrance.offset())),
            )
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(palette.page_style());

        let mut layers = stack![page];

        if let Some(toast) = self.toasts.current() {
            layers = layers.push(
                container(ui::toast::view(toast, palette))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_right(Length::Fill)
                    .align_bottom(Length::Fill)
                    .padding(24),
            );
        }

        if self.settings.cursor_follow {
            layers = layers.push(
                canvas(PawOverlay {
                    position: self.paw.position(),
                    color: palette.paw,
                })
                .width(Length::Fill)
                .height(Length::Fill),
            );
        }

        layers.into()
    }

    /// Pointer, keyboard and (while moving) animation frame listeners.
    /// The listeners live exactly as long as the page does.
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![event::listen_with(handle_event)];

        if self.is_animating() {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Palette::iced_theme(self.settings.theme)
    }
}

fn section_heading(label: &str, palette: Palette) -> Element<'_, Message> {
    text(label).size(30).color(palette.heading).into()
}

/// Map window events to page messages. Arrow keys only navigate the
/// carousel when no widget (e.g. the search field) consumed them.
fn handle_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::CursorMoved(position)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) if status == event::Status::Ignored => {
            match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::CarouselPrevious),
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::CarouselNext),
                _ => None,
            }
        }
        _ => None,
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application(data::PAGE_TITLE, CatsPage::update, CatsPage::view)
        .subscription(CatsPage::subscription)
        .theme(CatsPage::theme)
        .window_size((1200.0, 900.0))
        .centered()
        .run_with(CatsPage::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> CatsPage {
        CatsPage::with_settings(Settings::default())
    }

    fn visible_names(page: &CatsPage) -> Vec<&'static str> {
        page.search
            .visible(&data::BREEDS)
            .iter()
            .map(|b| b.name)
            .collect()
    }

    fn key_press(key: keyboard::Key, code: keyboard::key::Code) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            modified_key: key.clone(),
            key,
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
        })
    }

    fn arrow(named: keyboard::key::Named, code: keyboard::key::Code) -> Event {
        key_press(keyboard::Key::Named(named), code)
    }

    #[test]
    fn test_pointer_move_becomes_cursor_message() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(12.0, 34.0),
        });
        let message = handle_event(event, event::Status::Ignored, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::CursorMoved(p)) if p == Point::new(12.0, 34.0)
        ));
    }

    #[test]
    fn test_arrow_keys_navigate_carousel() {
        use keyboard::key::{Code, Named};

        let right = handle_event(
            arrow(Named::ArrowRight, Code::ArrowRight),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(right, Some(Message::CarouselNext)));

        let left = handle_event(
            arrow(Named::ArrowLeft, Code::ArrowLeft),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(left, Some(Message::CarouselPrevious)));
    }

    #[test]
    fn test_arrow_keys_consumed_by_search_field_are_ignored() {
        use keyboard::key::{Code, Named};

        let left = handle_event(
            arrow(Named::ArrowLeft, Code::ArrowLeft),
            event::Status::Captured,
            window::Id::unique(),
        );
        assert!(left.is_none());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        use keyboard::key::{Code, Named};

        let enter = handle_event(
            arrow(Named::Enter, Code::Enter),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(enter.is_none());

        let letter = handle_event(
            key_press(keyboard::Key::Character("a".into()), Code::KeyA),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(letter.is_none());
    }

    #[test]
    fn test_initial_page_shows_all_breeds() {
        let page = page();
        assert_eq!(visible_names(&page).len(), 5);
        assert_eq!(page.carousel.index(), 0);
        assert!(page.toasts.current().is_none());
        assert!(page.slides.iter().all(|s| matches!(s, SlideImage::Loading)));
    }

    #[test]
    fn test_typing_narrows_breed_list() {
        let mut page = page();
        let _ = page.update(Message::SearchChanged("s".to_string()));
        assert_eq!(visible_names(&page), vec!["Siamese", "Persian", "Sphynx"]);

        let _ = page.update(Message::SearchChanged("SIAMESE".to_string()));
        assert_eq!(visible_names(&page), vec!["Siamese"]);

        let _ = page.update(Message::SearchChanged(String::new()));
        assert_eq!(visible_names(&page).len(), 5);
    }

    #[test]
    fn test_fact_button_shows_one_toast_per_click() {
        let mut page = page();
        let _ = page.update(Message::FactRequested);
        let first = page.toasts.current().unwrap().clone();
        assert_eq!(first.description, "Cats have over 20 muscles that control their ears.");

        let _ = page.update(Message::FactRequested);
        let second = page.toasts.current().unwrap().clone();
        assert_eq!(second.description, first.description);
        assert_ne!(second.id, first.id);

        // The first click's timer must not hide the second toast
        let _ = page.update(Message::ToastExpired(first.id));
        assert_eq!(page.toasts.current().map(|t| t.id), Some(second.id));

        let _ = page.update(Message::DismissToast(second.id));
        assert!(page.toasts.current().is_none());
    }

    #[test]
    fn test_carousel_messages_clamp() {
        let mut page = page();
        let _ = page.update(Message::CarouselPrevious);
        assert_eq!(page.carousel.index(), 0);

        for _ in 0..5 {
            let _ = page.update(Message::CarouselNext);
        }
        assert_eq!(page.carousel.index(), 2);

        let _ = page.update(Message::CarouselGoTo(1));
        assert_eq!(page.carousel.index(), 1);
    }

    #[test]
    fn test_carousel_loops_when_configured() {
        let mut page = CatsPage::with_settings(Settings {
            carousel_loop: true,
            ..Settings::default()
        });
        let _ = page.update(Message::CarouselPrevious);
        assert_eq!(page.carousel.index(), 2);
    }

    #[test]
    fn test_failed_slide_keeps_others_loading() {
        let mut page = page();
        let _ = page.update(Message::SlideLoaded(1, Err(slides::SlideError::Status(404))));
        assert!(matches!(page.slides[0], SlideImage::Loading));
        assert!(matches!(page.slides[1], SlideImage::Failed(_)));

        // Out of range results are ignored
        let _ = page.update(Message::SlideLoaded(9, Err(slides::SlideError::Status(500))));
        assert_eq!(page.slides.len(), 3);
    }

    #[test]
    fn test_loaded_slide() {
        let mut page = page();
        let decoded = slides::DecodedSlide {
            width: 1,
            height: 1,
            pixels: vec![0, 0, 0, 255],
        };
        let _ = page.update(Message::SlideLoaded(0, Ok(decoded)));
        assert!(matches!(page.slides[0], SlideImage::Loaded(_)));
    }

    #[test]
    fn test_animation_runs_until_settled() {
        let mut page = page();
        assert!(page.is_animating());

        let start = Instant::now();
        let mut now = start;
        for _ in 0..60 {
            let _ = page.update(Message::Frame(now));
            now += Duration::from_millis(16);
        }
        assert!(page.entrance.is_done());
        assert!(!page.is_animating());
        assert!(page.last_frame.is_none());

        let _ = page.update(Message::CursorMoved(Point::new(200.0, 150.0)));
        assert_eq!(page.cursor, CursorState { x: 200.0, y: 150.0 });
        assert!(page.is_animating());

        for _ in 0..600 {
            now += Duration::from_millis(16);
            let _ = page.update(Message::Frame(now));
        }
        assert!(!page.is_animating());
        assert_eq!(page.paw.position(), page.cursor);
    }

    #[test]
    fn test_cursor_follow_disabled_stops_paw_animation() {
        let mut page = CatsPage::with_settings(Settings {
            cursor_follow: false,
            ..Settings::default()
        });
        page.entrance.advance(Duration::from_secs(1));
        let _ = page.update(Message::CursorMoved(Point::new(10.0, 10.0)));
        assert!(!page.is_animating());
    }
}
