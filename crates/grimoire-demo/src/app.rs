#![forbid(unsafe_code)]

//! Application model: panel switching, input routing, frame ticks.

use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

use grimoire_core::event::{Event, KeyCode, MouseButton, MouseEventKind};
use grimoire_core::geometry::Rect;
use grimoire_runtime::subscription::{Every, Subscription};
use grimoire_runtime::{Cmd, Frame, Model};
use grimoire_widgets::grimoire::GrimoirePanel;
use grimoire_widgets::parasocial::ParasocialPanel;
use grimoire_widgets::theme::PanelTheme;
use tracing::debug;

/// Frame cadence for the animation tick.
const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// The three demo panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Midnight,
    Dreamcast,
    Parasocial,
}

impl PanelId {
    fn next(self) -> Self {
        match self {
            Self::Midnight => Self::Dreamcast,
            Self::Dreamcast => Self::Parasocial,
            Self::Parasocial => Self::Midnight,
        }
    }

    fn from_index(i: u16) -> Option<Self> {
        match i {
            1 => Some(Self::Midnight),
            2 => Some(Self::Dreamcast),
            3 => Some(Self::Parasocial),
            _ => None,
        }
    }

    /// Map a 1-indexed panel number, falling back to the first panel.
    pub fn from_index_or_default(i: u16) -> Self {
        Self::from_index(i).unwrap_or(Self::Midnight)
    }
}

/// Messages driving the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Animation frame tick.
    Tick,
    /// A translated terminal event.
    Input(Event),
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Msg::Input(event)
    }
}

/// Top-level model holding all three panels.
///
/// Only the visible panel is advanced on ticks, so a hidden panel's
/// animations are frozen, not running behind the scenes.
pub struct AppModel {
    panel: PanelId,
    midnight: GrimoirePanel,
    dreamcast: GrimoirePanel,
    parasocial: RefCell<ParasocialPanel>,
    last_area: Cell<Rect>,
    last_tick: Option<Instant>,
    run_time: Duration,
    exit_after: Option<Duration>,
}

impl AppModel {
    /// Build the model. `seed` feeds every randomized layer; equal
    /// seeds reproduce the same glitch and sprite behavior.
    pub fn new(seed: u64) -> Self {
        Self {
            panel: PanelId::Midnight,
            midnight: GrimoirePanel::new(PanelTheme::midnight(), seed),
            dreamcast: GrimoirePanel::new(PanelTheme::dreamcast(), seed ^ 0xd12a),
            parasocial: RefCell::new(ParasocialPanel::new(seed ^ 0x7e21)),
            last_area: Cell::new(Rect::new(0, 0, 80, 24)),
            last_tick: None,
            run_time: Duration::ZERO,
            exit_after: None,
        }
    }

    /// Start on a specific panel.
    pub fn start_panel(mut self, id: PanelId) -> Self {
        self.panel = id;
        self
    }

    /// Quit automatically after this much run time.
    pub fn exit_after(mut self, limit: Duration) -> Self {
        self.exit_after = Some(limit);
        self
    }

    /// The visible panel.
    pub fn panel(&self) -> PanelId {
        self.panel
    }

    fn switch_to(&mut self, id: PanelId) {
        if id != self.panel {
            debug!(?id, "panel switch");
            self.panel = id;
        }
    }

    fn active_grimoire_mut(&mut self) -> Option<&mut GrimoirePanel> {
        match self.panel {
            PanelId::Midnight => Some(&mut self.midnight),
            PanelId::Dreamcast => Some(&mut self.dreamcast),
            PanelId::Parasocial => None,
        }
    }

    /// Advance the visible panel's animations by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Cmd<Msg> {
        self.run_time += dt;
        match self.panel {
            PanelId::Midnight => self.midnight.advance(dt),
            PanelId::Dreamcast => self.dreamcast.advance(dt),
            PanelId::Parasocial => self.parasocial.borrow_mut().advance(dt),
        }
        if let Some(limit) = self.exit_after
            && self.run_time >= limit
        {
            return Cmd::quit();
        }
        Cmd::none()
    }

    fn jump_relative(&mut self, step: isize) {
        if let Some(panel) = self.active_grimoire_mut() {
            let len = panel.theme().phases.len() as isize;
            let next = (panel.phase_index() as isize + step).rem_euclid(len);
            panel.jump_phase(next as usize);
        }
    }

    fn handle_input(&mut self, event: Event) -> Cmd<Msg> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Escape => Cmd::quit(),
                KeyCode::Tab => {
                    self.switch_to(self.panel.next());
                    Cmd::none()
                }
                KeyCode::Char(c @ '1'..='3') => {
                    if let Some(id) = PanelId::from_index(c as u16 - '0' as u16) {
                        self.switch_to(id);
                    }
                    Cmd::none()
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Some(panel) = self.active_grimoire_mut() {
                        panel.toggle_reveal();
                    }
                    Cmd::none()
                }
                KeyCode::Left => {
                    self.jump_relative(-1);
                    Cmd::none()
                }
                KeyCode::Right => {
                    self.jump_relative(1);
                    Cmd::none()
                }
                _ => Cmd::none(),
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let area = self.last_area.get();
                    let hit = match self.panel {
                        PanelId::Midnight => self.midnight.dot_hit(area, mouse.x, mouse.y),
                        PanelId::Dreamcast => self.dreamcast.dot_hit(area, mouse.x, mouse.y),
                        PanelId::Parasocial => None,
                    };
                    if let (Some(i), Some(panel)) = (hit, self.active_grimoire_mut()) {
                        panel.jump_phase(i);
                    }
                }
                Cmd::none()
            }
            Event::Resize { width, height } => {
                self.parasocial.borrow_mut().set_viewport(width, height);
                Cmd::none()
            }
        }
    }
}

impl Model for AppModel {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Tick => {
                let now = Instant::now();
                let dt = match self.last_tick {
                    Some(prev) => now.duration_since(prev),
                    None => TICK_INTERVAL,
                };
                self.last_tick = Some(now);
                self.advance(dt)
            }
            Msg::Input(event) => self.handle_input(event),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area.set(area);
        match self.panel {
            PanelId::Midnight => self.midnight.render(area, &mut frame.buffer),
            PanelId::Dreamcast => self.dreamcast.render(area, &mut frame.buffer),
            PanelId::Parasocial => {
                let mut panel = self.parasocial.borrow_mut();
                panel.set_viewport(area.width, area.height);
                panel.render(area, &mut frame.buffer);
            }
        }
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
        vec![Box::new(Every::new(TICK_INTERVAL, || Msg::Tick))]
    }
}
