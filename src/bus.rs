use crate::enums::ComponentName;

/// A display-only bus. Data moves directly between components in the
/// handlers; the bus just remembers which logical endpoints were driven
/// during the last RTN step so an observer can draw the path. It has no
/// value and no read or write operations.
#[derive(Clone, Debug)]
pub struct Bus {
    name: ComponentName,
    connections: Vec<(ComponentName, ComponentName)>,
    active: bool,
}

impl Bus {
    pub fn new(name: ComponentName) -> Bus {
        Bus {
            name,
            connections: Vec::new(),
            active: false,
        }
    }

    pub fn name(&self) -> ComponentName {
        self.name
    }

    /// Records the `(source, destination)` endpoints driven in this step and
    /// marks the bus active. Most steps drive one pair; ALU operations show
    /// both inputs feeding the ALU.
    pub fn record(&mut self, connections: &[(ComponentName, ComponentName)]) {
        self.connections = connections.to_vec();
        self.active = true;
    }

    /// Clears the recorded endpoints and the activity flag.
    pub fn clear(&mut self) {
        self.connections.clear();
        self.active = false;
    }

    pub fn connections(&self) -> &[(ComponentName, ComponentName)] {
        &self.connections
    }

    pub fn active(&self) -> bool {
        self.active
    }
}
