//! Streaming assembly of containers from a row sequence

use super::container::RecordContainer;
use crate::app::services::row_codec::RowCodec;
use tracing::debug;

/// Groups consecutive rows with the same container name into containers.
///
/// Rows of one container must be adjacent in the input; a name that
/// reappears after a different one opens a second container of that name.
pub struct ContainerCollector<C, F> {
    containers: Vec<C>,
    factory: F,
}

impl<C, F> ContainerCollector<C, F>
where
    C: RecordContainer,
    F: FnMut(&str) -> C,
{
    /// Create a collector; `factory` builds an empty container for a name
    pub fn new(factory: F) -> Self {
        Self {
            containers: Vec::new(),
            factory,
        }
    }

    /// Append a row, opening a new container when the name changes
    pub fn append_row(&mut self, row: C::Row) {
        let opens_container = match self.containers.last() {
            Some(current) => current.container_name() != row.container_name(),
            None => true,
        };

        if opens_container {
            debug!("Starting container '{}'", row.container_name());
            let container = (self.factory)(row.container_name());
            self.containers.push(container);
        }

        if let Some(current) = self.containers.last_mut() {
            current.push_row(row);
        }
    }

    /// Containers collected so far
    pub fn containers(&self) -> &[C] {
        &self.containers
    }

    /// Finish collecting and return the containers in input order
    pub fn finish(self) -> Vec<C> {
        self.containers
    }
}
