//! Custom actions for the Settings actor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Flip the order-form lock inside the actor, answering the new value.
    ToggleOrderForm,
}
