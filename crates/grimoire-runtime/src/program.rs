#![forbid(unsafe_code)]

//! Elm-style runtime for terminal applications.
//!
//! The program runtime manages the update/view loop, handling events and
//! rendering frames. It separates state (Model) from rendering (View) and
//! provides a command pattern for side effects.
//!
//! # Example
//!
//! ```ignore
//! use grimoire_runtime::program::{Cmd, Model};
//! use grimoire_core::event::{Event, KeyCode};
//! use grimoire_runtime::program::Frame;
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//!     Noop,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Key(k) if k.code == KeyCode::Char('q') => Msg::Quit,
//!             Event::Key(k) if k.code == KeyCode::Char('+') => Msg::Increment,
//!             _ => Msg::Noop,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
//!         match msg {
//!             Msg::Increment => {
//!                 self.count += 1;
//!                 Cmd::none()
//!             }
//!             Msg::Quit => Cmd::quit(),
//!             Msg::Noop => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         // Render counter value into frame.buffer
//!     }
//! }
//! ```

use crate::subscription::{Subscription, SubscriptionManager};
use grimoire_core::buffer::Buffer;
use grimoire_core::cell::CellAttrs;
use grimoire_core::color::Rgba;
use grimoire_core::event::{
    Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
use grimoire_core::geometry::Rect;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, info};

/// The Model trait defines application state and behavior.
///
/// Implementations define how the application responds to events
/// and renders its current state.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages represent actions that update the model state.
    /// Must be convertible from terminal events.
    type Message: From<Event> + Send + 'static;

    /// Initialize the model with startup commands.
    ///
    /// Called once when the program starts.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function. Returns commands
    /// for any side effects that should be executed.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions.
    ///
    /// Called after every update. The runtime reconciles the returned
    /// set against whatever is currently running: subscriptions that
    /// disappear from the list are stopped and joined before the next
    /// iteration, so a model stops receiving timer messages the moment
    /// it stops declaring the timer.
    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        Vec::new()
    }
}

/// A side effect requested by the model.
pub enum Cmd<M> {
    /// Do nothing.
    None,
    /// Exit the program.
    Quit,
    /// Feed a message back into the model.
    Msg(M),
    /// Execute several commands.
    Batch(Vec<Cmd<M>>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a batch command.
    #[inline]
    pub fn batch(cmds: Vec<Cmd<M>>) -> Self {
        Self::Batch(cmds)
    }
}

/// The render target handed to [`Model::view`].
pub struct Frame {
    /// The cell grid for this frame. Cleared before every view call.
    pub buffer: Buffer,
}

impl Frame {
    /// Create a frame sized to the terminal.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
        }
    }

    /// The drawable area.
    pub fn area(&self) -> Rect {
        self.buffer.area()
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Input poll timeout. Bounds the latency of subscription messages
    /// reaching the model when no input arrives.
    pub poll_timeout: Duration,
    /// Capture mouse events.
    pub mouse_capture: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(33),
            mouse_capture: true,
        }
    }
}

/// RAII terminal setup: raw mode, alternate screen, hidden cursor.
///
/// Restores the terminal on drop, including on unwind, so a panicking
/// model does not leave the shell in raw mode.
struct TerminalGuard {
    mouse_capture: bool,
}

impl TerminalGuard {
    fn new(config: &ProgramConfig) -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        crossterm::execute!(
            out,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide
        )?;
        if config.mouse_capture {
            crossterm::execute!(out, crossterm::event::EnableMouseCapture)?;
        }
        Ok(Self {
            mouse_capture: config.mouse_capture,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.mouse_capture {
            let _ = crossterm::execute!(out, crossterm::event::DisableMouseCapture);
        }
        let _ = crossterm::execute!(
            out,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// The program runtime: owns the model and drives the event loop.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
    subscriptions: SubscriptionManager<M::Message>,
    frame: Frame,
    running: bool,
}

impl<M: Model> Program<M> {
    /// Create a program with default configuration.
    pub fn new(model: M) -> Self {
        Self::with_config(model, ProgramConfig::default())
    }

    /// Create a program with the given configuration.
    pub fn with_config(model: M, config: ProgramConfig) -> Self {
        Self {
            model,
            config,
            subscriptions: SubscriptionManager::new(),
            frame: Frame::new(0, 0),
            running: false,
        }
    }

    /// Run the event loop until the model quits.
    ///
    /// Sets up the terminal, runs init, then alternates between input
    /// polling, subscription message delivery, and rendering. The
    /// terminal is restored before this returns.
    pub fn run(mut self) -> io::Result<M> {
        let guard = TerminalGuard::new(&self.config)?;
        let (width, height) = crossterm::terminal::size()?;
        self.frame = Frame::new(width, height);
        self.running = true;

        info!(width, height, "program started");

        let cmd = self.model.init();
        self.apply_cmd(cmd);
        self.subscriptions.reconcile(self.model.subscriptions());
        self.render()?;

        while self.running {
            let mut dirty = false;

            if crossterm::event::poll(self.config.poll_timeout)? {
                loop {
                    let raw = crossterm::event::read()?;
                    if let Some(event) = translate_event(raw) {
                        if let Event::Resize { width, height } = event {
                            self.frame = Frame::new(width, height);
                        }
                        self.dispatch(M::Message::from(event));
                        dirty = true;
                    }
                    if !crossterm::event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }

            for msg in self.subscriptions.drain_messages() {
                self.dispatch(msg);
                dirty = true;
            }

            if dirty && self.running {
                self.subscriptions.reconcile(self.model.subscriptions());
                self.render()?;
            }
        }

        debug!("program quitting");
        self.subscriptions.stop_all();
        drop(guard);
        Ok(self.model)
    }

    fn dispatch(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.apply_cmd(cmd);
    }

    fn apply_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => self.dispatch(m),
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.apply_cmd(c);
                }
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.frame.buffer.clear();
        self.model.view(&mut self.frame);
        let mut out = io::stdout();
        present(&mut out, &self.frame.buffer)?;
        out.flush()
    }
}

/// Write a full buffer to the terminal.
///
/// Color and attribute state is tracked across cells so runs of
/// identically styled text cost one escape sequence, not one per cell.
fn present(out: &mut Stdout, buffer: &Buffer) -> io::Result<()> {
    use crossterm::cursor::MoveTo;
    use crossterm::style::{
        Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    };

    crossterm::queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    let mut fg = Rgba::TRANSPARENT;
    let mut bg = Rgba::TRANSPARENT;
    let mut attrs = CellAttrs::empty();

    for y in 0..buffer.height() {
        crossterm::queue!(out, MoveTo(0, y))?;
        for x in 0..buffer.width() {
            let Some(cell) = buffer.get(x, y) else {
                continue;
            };
            if cell.attrs != attrs {
                // Attribute reset also clears colors; re-emit both.
                crossterm::queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
                fg = Rgba::TRANSPARENT;
                bg = Rgba::TRANSPARENT;
                for attr in attribute_sequence(cell.attrs) {
                    crossterm::queue!(out, SetAttribute(attr))?;
                }
                attrs = cell.attrs;
            }
            if cell.fg != fg {
                crossterm::queue!(out, SetForegroundColor(to_crossterm_color(cell.fg)))?;
                fg = cell.fg;
            }
            if cell.bg != bg {
                crossterm::queue!(out, SetBackgroundColor(to_crossterm_color(cell.bg)))?;
                bg = cell.bg;
            }
            crossterm::queue!(out, Print(cell.ch))?;
        }
    }
    crossterm::queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    Ok(())
}

fn attribute_sequence(attrs: CellAttrs) -> Vec<crossterm::style::Attribute> {
    use crossterm::style::Attribute;
    let mut seq = Vec::new();
    if attrs.contains(CellAttrs::BOLD) {
        seq.push(Attribute::Bold);
    }
    if attrs.contains(CellAttrs::DIM) {
        seq.push(Attribute::Dim);
    }
    if attrs.contains(CellAttrs::ITALIC) {
        seq.push(Attribute::Italic);
    }
    if attrs.contains(CellAttrs::UNDERLINE) {
        seq.push(Attribute::Underlined);
    }
    if attrs.contains(CellAttrs::REVERSE) {
        seq.push(Attribute::Reverse);
    }
    seq
}

fn to_crossterm_color(color: Rgba) -> crossterm::style::Color {
    if color.is_transparent() {
        crossterm::style::Color::Reset
    } else {
        crossterm::style::Color::Rgb {
            r: color.r(),
            g: color.g(),
            b: color.b(),
        }
    }
}

/// Translate a backend event into the runtime's event model.
///
/// Events with no counterpart (focus changes, paste, scroll, key
/// release) are dropped.
fn translate_event(raw: crossterm::event::Event) -> Option<Event> {
    use crossterm::event as ct;
    match raw {
        ct::Event::Key(key) => {
            if key.kind == ct::KeyEventKind::Release {
                return None;
            }
            let code = match key.code {
                ct::KeyCode::Char(c) => KeyCode::Char(c),
                ct::KeyCode::Enter => KeyCode::Enter,
                ct::KeyCode::Esc => KeyCode::Escape,
                ct::KeyCode::Tab => KeyCode::Tab,
                ct::KeyCode::Left => KeyCode::Left,
                ct::KeyCode::Right => KeyCode::Right,
                ct::KeyCode::Up => KeyCode::Up,
                ct::KeyCode::Down => KeyCode::Down,
                _ => return None,
            };
            let mut modifiers = Modifiers::empty();
            if key.modifiers.contains(ct::KeyModifiers::SHIFT) {
                modifiers |= Modifiers::SHIFT;
            }
            if key.modifiers.contains(ct::KeyModifiers::CONTROL) {
                modifiers |= Modifiers::CTRL;
            }
            if key.modifiers.contains(ct::KeyModifiers::ALT) {
                modifiers |= Modifiers::ALT;
            }
            Some(Event::Key(KeyEvent { code, modifiers }))
        }
        ct::Event::Mouse(mouse) => {
            let kind = match mouse.kind {
                ct::MouseEventKind::Down(b) => MouseEventKind::Down(translate_button(b)?),
                ct::MouseEventKind::Up(b) => MouseEventKind::Up(translate_button(b)?),
                ct::MouseEventKind::Moved | ct::MouseEventKind::Drag(_) => MouseEventKind::Moved,
                _ => return None,
            };
            Some(Event::Mouse(MouseEvent {
                kind,
                x: mouse.column,
                y: mouse.row,
            }))
        }
        ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

fn translate_button(button: crossterm::event::MouseButton) -> Option<MouseButton> {
    use crossterm::event::MouseButton as Ct;
    match button {
        Ct::Left => Some(MouseButton::Left),
        Ct::Right => Some(MouseButton::Right),
        Ct::Middle => Some(MouseButton::Middle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: i32,
        quit_on: i32,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Msg {
        Bump,
        Other,
    }

    impl From<Event> for Msg {
        fn from(event: Event) -> Self {
            match event {
                Event::Key(k) if k.code == KeyCode::Char('+') => Msg::Bump,
                _ => Msg::Other,
            }
        }
    }

    impl Model for Counter {
        type Message = Msg;

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Bump => {
                    self.count += 1;
                    if self.count >= self.quit_on {
                        Cmd::quit()
                    } else {
                        Cmd::none()
                    }
                }
                Msg::Other => Cmd::none(),
            }
        }

        fn view(&self, _frame: &mut Frame) {}
    }

    fn apply<M: Model>(program: &mut Program<M>, cmd: Cmd<M::Message>) {
        program.apply_cmd(cmd);
    }

    #[test]
    fn quit_command_stops_the_loop() {
        let mut p = Program::new(Counter {
            count: 0,
            quit_on: 1,
        });
        p.running = true;
        apply(&mut p, Cmd::quit());
        assert!(!p.running);
    }

    #[test]
    fn msg_command_reenters_update() {
        let mut p = Program::new(Counter {
            count: 0,
            quit_on: 100,
        });
        p.running = true;
        apply(&mut p, Cmd::msg(Msg::Bump));
        apply(&mut p, Cmd::msg(Msg::Bump));
        assert_eq!(p.model.count, 2);
        assert!(p.running);
    }

    #[test]
    fn batch_applies_in_order_and_honors_quit() {
        let mut p = Program::new(Counter {
            count: 0,
            quit_on: 2,
        });
        p.running = true;
        apply(
            &mut p,
            Cmd::batch(vec![Cmd::msg(Msg::Bump), Cmd::msg(Msg::Bump)]),
        );
        assert_eq!(p.model.count, 2);
        assert!(!p.running);
    }

    #[test]
    fn frame_resizes_with_terminal() {
        let frame = Frame::new(80, 24);
        assert_eq!(frame.area(), Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn key_translation_maps_modifiers() {
        use crossterm::event as ct;
        let raw = ct::Event::Key(ct::KeyEvent::new(
            ct::KeyCode::Char('x'),
            ct::KeyModifiers::CONTROL,
        ));
        let translated = translate_event(raw);
        assert_eq!(
            translated,
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('x'),
                modifiers: Modifiers::CTRL,
            }))
        );
    }

    #[test]
    fn unsupported_events_are_dropped() {
        use crossterm::event as ct;
        let raw = ct::Event::Key(ct::KeyEvent::new(
            ct::KeyCode::F(5),
            ct::KeyModifiers::empty(),
        ));
        assert_eq!(translate_event(raw), None);
    }

    #[test]
    fn mouse_down_keeps_coordinates() {
        use crossterm::event as ct;
        let raw = ct::Event::Mouse(ct::MouseEvent {
            kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: ct::KeyModifiers::empty(),
        });
        assert_eq!(
            translate_event(raw),
            Some(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                x: 12,
                y: 7,
            }))
        );
    }

    #[test]
    fn transparent_color_maps_to_terminal_default() {
        assert_eq!(
            to_crossterm_color(Rgba::TRANSPARENT),
            crossterm::style::Color::Reset
        );
        assert_eq!(
            to_crossterm_color(Rgba::rgb(10, 20, 30)),
            crossterm::style::Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
