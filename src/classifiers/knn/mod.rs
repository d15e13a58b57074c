mod k_nearest_neighbors;

pub use k_nearest_neighbors::KNearestNeighbors;
