use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::input::keyboard::{self, BOUND_KEYS};
use crate::input::swipe::SwipeTracker;
use crate::input::wheel::WheelDebouncer;
use crate::input::{Command, Intent};
use crate::media::{MediaEvent, MediaPlayback};
use crate::navigator::Navigator;
use crate::parser::{self, Presentation};
use crate::particles::ParticleField;
use crate::render::chrome::{self, MediaAction};
use crate::render::{self, transition::TransitionKind};
use crate::scheduler::Scheduler;
use crate::theme::Theme;

/// Delay between the first frame and hiding the preloader.
const PRELOADER_DELAY: Duration = Duration::from_millis(800);
const PRELOADER_FADE: f32 = 0.5;
const TOAST_DURATION: f32 = 1.5;

pub struct LaunchOptions {
    pub windowed: bool,
    /// 1-indexed slide to open on.
    pub start_slide: Option<usize>,
    pub particles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppTimer {
    HidePreloader,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            start: now,
        }
    }

    fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - fade_start) / (TOAST_DURATION - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start).as_secs_f32() >= TOAST_DURATION
    }
}

struct DeckApp {
    presentation: Presentation,
    title: String,
    theme: Theme,
    transition: TransitionKind,
    navigator: Navigator,
    wheel: WheelDebouncer,
    swipe: SwipeTracker,
    /// Designated media slide and its playback clock.
    media: Option<(usize, MediaPlayback)>,
    particles_enabled: bool,
    /// Built on the first frame, once the surface size is known.
    particles: Option<ParticleField<StdRng>>,
    timers: Scheduler<AppTimer>,
    /// Set by the first tick; the preloader delay counts from here.
    loaded_at: Option<Instant>,
    preloader_hidden_at: Option<Instant>,
    show_help: bool,
    toast: Option<Toast>,
    last_frame: Instant,
}

impl DeckApp {
    fn new(
        presentation: Presentation,
        title: String,
        theme: Theme,
        transition: TransitionKind,
        start: usize,
        particles: bool,
        now: Instant,
    ) -> anyhow::Result<Self> {
        let navigator = Navigator::with_start(presentation.slides.len(), start)?;
        let media = presentation
            .media_slide()
            .map(|(index, duration)| (index, MediaPlayback::new(duration)));
        log::info!(
            "presenting {:?}: {} slides, starting at {}",
            title,
            navigator.slide_count(),
            navigator.current() + 1
        );

        Ok(Self {
            presentation,
            title,
            theme,
            transition,
            navigator,
            wheel: WheelDebouncer::default(),
            swipe: SwipeTracker::new(),
            media,
            particles_enabled: particles,
            particles: None,
            timers: Scheduler::new(),
            loaded_at: None,
            preloader_hidden_at: None,
            show_help: false,
            toast: None,
            last_frame: now,
        })
    }

    /// Fire due timers and advance clocks. Returns commands raised by them.
    fn tick(&mut self, now: Instant) -> Vec<Command> {
        let dt = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        let mut commands = Vec::new();

        if self.loaded_at.is_none() {
            self.loaded_at = Some(now);
            self.timers.schedule_after(now, PRELOADER_DELAY, AppTimer::HidePreloader);
        }

        for timer in self.timers.drain_due(now) {
            match timer {
                AppTimer::HidePreloader => {
                    log::debug!("hiding preloader");
                    self.preloader_hidden_at = Some(now);
                }
            }
        }

        self.navigator.tick(now);

        if let Some(intent) = self.wheel.poll(now) {
            commands.push(intent.into());
        }

        let current = self.navigator.current();
        if let Some((index, media)) = self.media.as_mut() {
            if *index == current && media.advance(dt) == Some(MediaEvent::Ended) {
                commands.push(Command::Navigate(Intent::Advance));
            }
        }

        if let Some(field) = self.particles.as_mut() {
            field.advance(dt);
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }

        commands
    }

    /// Apply one command. Window-level effects come back as a viewport command.
    fn apply(
        &mut self,
        command: Command,
        now: Instant,
        fullscreen: bool,
    ) -> Option<egui::ViewportCommand> {
        match command {
            Command::Navigate(intent) => {
                if self.navigator.dispatch(intent, now) {
                    self.on_slide_changed();
                }
                None
            }
            Command::ToggleFullscreen => {
                log::debug!("fullscreen -> {}", !fullscreen);
                Some(egui::ViewportCommand::Fullscreen(!fullscreen))
            }
            Command::ExitFullscreen => {
                if fullscreen {
                    Some(egui::ViewportCommand::Fullscreen(false))
                } else {
                    None
                }
            }
            Command::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            Command::ToggleMedia => {
                let current = self.navigator.current();
                match self.media.as_mut() {
                    Some((index, media)) if *index == current => {
                        media.toggle();
                        let state = if media.is_playing() { "Playing" } else { "Paused" };
                        self.toast = Some(Toast::new(state, now));
                    }
                    _ => {}
                }
                None
            }
            Command::Quit => Some(egui::ViewportCommand::Close),
        }
    }

    /// Create the particle field for a surface of `bounds`, or follow a resize.
    fn layout_particles(&mut self, bounds: egui::Vec2) {
        if !self.particles_enabled {
            return;
        }
        match self.particles.as_mut() {
            Some(field) => field.resize(bounds),
            None => {
                log::debug!("particle surface {}x{}", bounds.x, bounds.y);
                self.particles = Some(ParticleField::new(bounds, StdRng::from_os_rng()));
            }
        }
    }

    fn on_slide_changed(&mut self) {
        let current = self.navigator.current();
        if let Some((index, media)) = self.media.as_mut() {
            if *index != current && media.is_playing() {
                log::debug!("left media slide, pausing");
                media.pause();
            }
        }
    }

    fn preloader_opacity(&self, now: Instant) -> f32 {
        match self.preloader_hidden_at {
            None => 1.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at).as_secs_f32();
                (1.0 - elapsed / PRELOADER_FADE).max(0.0)
            }
        }
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    /// Earliest pending timer across all components.
    fn next_deadline(&self) -> Option<Instant> {
        [
            self.timers.next_deadline(),
            self.navigator.next_deadline(),
            self.wheel.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.particles_enabled
            || self.navigator.is_transitioning()
            || self.media.as_ref().is_some_and(|(_, m)| m.is_playing())
            || self.toast.is_some()
            || (self.preloader_hidden_at.is_some() && self.preloader_opacity(now) > 0.0)
    }

    /// Collect commands from keys, touches and the wheel for this frame.
    /// Also reports whether the viewport is fullscreen.
    fn read_input(&mut self, ctx: &egui::Context, now: Instant) -> (Vec<Command>, bool) {
        ctx.input(|i| self.commands_from_input(i, now))
    }

    fn commands_from_input(&mut self, i: &egui::InputState, now: Instant) -> (Vec<Command>, bool) {
        let fullscreen = i.viewport().fullscreen.unwrap_or(false);
        let mut commands: Vec<Command> = BOUND_KEYS
            .iter()
            .filter(|&&key| i.key_pressed(key))
            .filter_map(|&key| keyboard::command_for(key, fullscreen))
            .collect();

        for event in &i.events {
            if let egui::Event::Touch { id, phase, pos, .. } = event {
                if let Some(intent) = self.swipe.on_touch(*id, *phase, *pos) {
                    commands.push(intent.into());
                }
            }
        }

        // egui reports content motion; page convention is the opposite sign.
        let scroll = i.raw_scroll_delta.y;
        if scroll != 0.0 {
            self.wheel.on_wheel(-scroll, now);
        }

        (commands, fullscreen)
    }

    fn draw_slides(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32, now: Instant) {
        let slides = &self.presentation.slides;
        match self.navigator.transition_progress(now) {
            Some((from, to, t)) => {
                for p in render::transition::placements(self.transition, from, to, t, rect) {
                    let slide = &slides[p.index];
                    render::render_slide(ui, slide, &self.theme, p.rect, p.opacity, scale);
                }
            }
            None => {
                let current = self.navigator.current();
                render::render_slide(ui, &slides[current], &self.theme, rect, 1.0, scale);
            }
        }
    }

    fn shutdown(&mut self) {
        self.navigator.shutdown();
        self.wheel.cancel();
        self.timers.clear();
        self.particles_enabled = false;
        self.particles = None;
        if let Some((_, media)) = self.media.as_mut() {
            media.pause();
        }
        log::debug!("presentation torn down");
    }
}

impl Drop for DeckApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut commands = self.tick(now);

        let (input_commands, fullscreen) = self.read_input(ctx, now);
        commands.extend(input_commands);

        // Viewport commands are sent after the input closure has released its lock.
        let mut viewport_cmds: Vec<egui::ViewportCommand> = commands
            .into_iter()
            .filter_map(|cmd| self.apply(cmd, now, fullscreen))
            .collect();

        let bg = self.theme.background;
        let mut clicked: Vec<Command> = Vec::new();
        let mut seek = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let scale = Self::compute_scale(rect);

                self.draw_slides(ui, rect, scale, now);

                self.layout_particles(rect.size());
                if let Some(field) = self.particles.as_ref() {
                    render::particles::draw(ui, field, rect);
                }

                let indicators = self.navigator.indicators();
                chrome::draw_progress(ui, indicators, &self.theme, rect, scale);
                chrome::draw_counter(
                    ui,
                    indicators,
                    self.navigator.slide_count(),
                    &self.theme,
                    rect,
                    scale,
                );
                if let Some(i) = chrome::draw_dots(ui, indicators, &self.theme, rect, scale) {
                    clicked.push(Command::Navigate(Intent::JumpTo(i)));
                }
                if let Some(intent) = chrome::draw_arrows(ui, indicators, &self.theme, rect, scale)
                {
                    clicked.push(Command::Navigate(intent));
                }
                if let Some(footer) = self.presentation.meta.footer.as_deref() {
                    chrome::draw_footer(ui, footer, &self.theme, rect, scale);
                }

                let current = self.navigator.current();
                if let Some((index, media)) = self.media.as_ref() {
                    if *index == current && !self.navigator.is_transitioning() {
                        match chrome::draw_media_bar(ui, media, &self.theme, rect, scale) {
                            Some(MediaAction::Toggle) => clicked.push(Command::ToggleMedia),
                            Some(MediaAction::Seek(fraction)) => seek = Some(fraction),
                            None => {}
                        }
                    }
                }

                if self.show_help {
                    chrome::draw_help(ui, &self.theme, rect, scale);
                }
                if let Some(toast) = self.toast.as_ref() {
                    let opacity = toast.opacity(now);
                    chrome::draw_toast(ui, &toast.message, opacity, &self.theme, rect, scale);
                }

                let preloader = self.preloader_opacity(now);
                chrome::draw_preloader(ui, &self.title, &self.theme, rect, preloader, scale);
            });

        if let (Some(fraction), Some((_, media))) = (seek, self.media.as_mut()) {
            media.seek(fraction * media.duration());
        }
        viewport_cmds.extend(
            clicked
                .into_iter()
                .filter_map(|cmd| self.apply(cmd, now, fullscreen)),
        );
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if self.is_animating(now) {
            ctx.request_repaint();
        } else if let Some(deadline) = self.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

pub fn run(file: PathBuf, options: LaunchOptions) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&file)?;
    let presentation = parser::parse(&content);

    if presentation.slides.is_empty() {
        anyhow::bail!("No slides found in {}", file.display());
    }

    let title = presentation.meta.title.clone().unwrap_or_else(|| {
        file.file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    });

    // Frontmatter beats config; CLI flags beat both.
    let config = Config::load_or_default();
    let theme_name = presentation
        .meta
        .theme
        .as_deref()
        .or(config.theme())
        .unwrap_or("dark");
    let theme = Theme::from_name(theme_name);
    let transition_name = presentation
        .meta
        .transition
        .as_deref()
        .or(config.transition())
        .unwrap_or("fade");
    let transition = TransitionKind::from_name(transition_name);
    let particles = options.particles && config.particles();
    let start = options
        .start_slide
        .map(|s| s.saturating_sub(1))
        .or(config.start_slide())
        .unwrap_or(0);

    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = DeckApp::new(
        presentation,
        title.clone(),
        theme,
        transition,
        start,
        particles,
        Instant::now(),
    )?;

    eframe::run_native(&title, native_options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("{e}"))
}
