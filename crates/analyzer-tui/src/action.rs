/// A user intent, decoupled from the terminal event that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Ctrl+C: leave without confirmation.
    ForceQuit,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    /// Enter: open directory / pick file / open picker.
    DrillIn,
    /// Esc: leave the picker, close overlays.
    NavigateBack,
    OpenPicker,
    /// Text pasted into the terminal; a file dropped on the window arrives this way.
    Drop(String),
    ClickAt(u16, u16),
    /// Pointer moved (or dragged) to a cell.
    HoverAt(u16, u16),
    /// Pointer or drag left the terminal window.
    HoverLost,
    CopyToClipboard,
    ToggleHelp,
    Tick,
    Resize(u16, u16),
    None,
}
