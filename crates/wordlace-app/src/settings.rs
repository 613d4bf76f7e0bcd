#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Print feedback after every input event, not only on `check`.
    pub check_on_entry: bool,
    /// List every slot id with its state on `check`.
    pub show_slot_ids: bool,
}
