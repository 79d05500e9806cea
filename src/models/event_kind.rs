/// A single status marker a log message can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A work program was loaded/prepared ("Arbeitsprog...").
    Loaded,
    /// "Programm gestartet".
    Started,
    /// "Programmende", "Programm beendet" or "Programm gestoppt".
    Ended,
    Other,
}

const LOADED_MARKERS: &[&str] = &["arbeitsprog"];
const STARTED_MARKERS: &[&str] = &["programm gestartet"];
const ENDED_MARKERS: &[&str] = &["programmende", "programm beendet", "programm gestoppt"];

/// Markers found in one message. They are independent: the controller writes
/// "Arbeitsprogramm gestartet", which is both a load and a start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventKinds {
    pub loaded: bool,
    pub started: bool,
    pub ended: bool,
}

impl EventKinds {
    /// Case-insensitive marker search.
    pub fn classify(message: &str) -> Self {
        let msg = message.to_lowercase();
        let has = |markers: &[&str]| markers.iter().any(|m| msg.contains(m));

        Self {
            loaded: has(LOADED_MARKERS),
            started: has(STARTED_MARKERS),
            ended: has(ENDED_MARKERS),
        }
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Loaded => self.loaded,
            EventKind::Started => self.started,
            EventKind::Ended => self.ended,
            EventKind::Other => self.is_other(),
        }
    }

    pub fn is_other(&self) -> bool {
        !(self.loaded || self.started || self.ended)
    }
}

impl From<EventKind> for EventKinds {
    fn from(kind: EventKind) -> Self {
        Self {
            loaded: kind == EventKind::Loaded,
            started: kind == EventKind::Started,
            ended: kind == EventKind::Ended,
        }
    }
}
