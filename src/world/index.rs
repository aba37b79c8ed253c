use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use super::loader::DescriptorSource;
use super::model::{Position, Room, RoomDescriptor};

/// Sparse spatial index: only coordinates that have been ingested hold a room.
#[derive(Debug, Default)]
pub struct World {
    pub name: String,
    pub desc: String,
    rooms: HashMap<Position, Room>,
}

/// What a single `ingest` call did to the index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub inserted: usize,
    pub replaced: usize,
    pub dropped_exits: usize,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build each descriptor's room and store it at its position. A room
    /// already at that position is replaced outright, so later descriptors
    /// win over earlier ones.
    pub fn ingest<I>(&mut self, descriptors: I) -> IngestSummary
    where
        I: IntoIterator<Item = RoomDescriptor>,
    {
        let mut summary = IngestSummary::default();

        for desc in descriptors {
            let (room, dropped) = desc.build_room();
            if dropped > 0 {
                warn!(
                    position = %desc.position,
                    dropped,
                    "descriptor names exits that are not known directions"
                );
                summary.dropped_exits += dropped;
            }

            match self.rooms.entry(desc.position) {
                Entry::Occupied(mut slot) => {
                    debug!(
                        position = %desc.position,
                        old = slot.get().title(),
                        new = room.title(),
                        "replacing room"
                    );
                    slot.insert(room);
                    summary.replaced += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(room);
                    summary.inserted += 1;
                }
            }
        }

        debug!(
            inserted = summary.inserted,
            replaced = summary.replaced,
            total = self.rooms.len(),
            "ingest finished"
        );
        summary
    }

    pub fn ingest_from<S>(&mut self, source: &S) -> IngestSummary
    where
        S: DescriptorSource + ?Sized,
    {
        self.ingest(source.fetch_room_descriptors())
    }

    pub fn get_room(&self, x: i64, y: i64, z: i64) -> Option<&Room> {
        self.room_at(Position::new(x, y, z))
    }

    pub fn room_at(&self, pos: Position) -> Option<&Room> {
        self.rooms.get(&pos)
    }

    pub fn room_at_mut(&mut self, pos: Position) -> Option<&mut Room> {
        self.rooms.get_mut(&pos)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Occupied coordinates in ascending order.
    pub fn positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = self.rooms.keys().copied().collect();
        positions.sort();
        positions
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Room)> {
        self.rooms.iter()
    }
}
