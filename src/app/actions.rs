/// Actions a key press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Movement
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,

    // Selection
    Confirm,
    Back,

    // Output grid editing
    ToggleOutput,
    UniverseInc,
    UniverseDec,
    SaveAll,

    // Focus
    SwitchFocus,

    // Pages
    GotoController,
    GotoSchematic,
    GotoMainPcb,
    GotoDisplayPcb,
    GotoOutputPcb,

    // Design files
    ExportProject,
    DownloadGerbers,
    OpenDesignTool,

    // Application
    Quit,
}
