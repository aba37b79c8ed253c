use super::model::RoomDescriptor;

/// The three-room bootstrap world: a starting room with a room to the north
/// and one to the west, each linked back.
pub fn sample_descriptors() -> Vec<RoomDescriptor> {
    vec![
        RoomDescriptor::new(
            "The First Room.",
            "You are in the first room.",
            &["north", "west"],
            (8, 0, 0),
        ),
        RoomDescriptor::new(
            "The Northern Room.",
            "You are in the Northern room.",
            &["south"],
            (8, 1, 0),
        ),
        RoomDescriptor::new(
            "The Western Room.",
            "You are in the Western room.",
            &["east"],
            (7, 0, 0),
        ),
    ]
}
