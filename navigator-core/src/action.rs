/// What the event loop should do after a platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the event loop and shut down.
    Quit,
    /// Repaint the current frame.
    Redraw,
    Ignore,
}
