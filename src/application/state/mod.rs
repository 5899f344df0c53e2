/// Per-vessel view state owned by a component session
///
/// Both holders are pure visibility/inspection switches: neither decides
/// which components exist in the forest or the inventory.
mod expansion_state;
mod selection_state;

pub use expansion_state::ExpansionState;
pub use selection_state::SelectionState;
