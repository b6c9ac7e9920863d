use serde::{Deserialize, Serialize};

/// Coarse classification of fine-grained replay event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventGroup {
    Selection,
    Commands,
    Camera,
}

impl EventGroup {
    pub const ALL: [EventGroup; 3] = [Self::Selection, Self::Commands, Self::Camera];

    /// Classifies an event kind; anything unrecognized is a camera event.
    #[must_use]
    pub fn classify(kind: &str) -> Self {
        match kind {
            "GetControlGroupEvent"
            | "SelectionEvent"
            | "SetControlGroupEvent"
            | "AddToControlGroupEvent" => Self::Selection,
            "TargetPointCommandEvent"
            | "TargetUnitCommandEvent"
            | "BasicCommandEvent"
            | "DataCommandEvent" => Self::Commands,
            _ => Self::Camera,
        }
    }

    /// Category id this group shares colors with.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Commands => "commands",
            Self::Camera => "camera",
        }
    }

    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            Self::Selection => 0,
            Self::Commands => 1,
            Self::Camera => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EventGroup;

    #[test]
    fn control_group_events_are_selection() {
        assert_eq!(
            EventGroup::classify("AddToControlGroupEvent"),
            EventGroup::Selection
        );
        assert_eq!(EventGroup::classify("SelectionEvent"), EventGroup::Selection);
    }

    #[test]
    fn command_events_are_commands() {
        assert_eq!(
            EventGroup::classify("TargetUnitCommandEvent"),
            EventGroup::Commands
        );
        assert_eq!(EventGroup::classify("DataCommandEvent"), EventGroup::Commands);
    }

    #[test]
    fn unknown_events_default_to_camera() {
        assert_eq!(EventGroup::classify("CameraUpdateEvent"), EventGroup::Camera);
        assert_eq!(EventGroup::classify(""), EventGroup::Camera);
    }
}
